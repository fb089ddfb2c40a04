//! Document normalization
//!
//! Converts a raw stored document into the canonical API shape:
//!
//! 1. The record identifier becomes a plain `id` string (any
//!    `table:key` prefix from the document store is stripped).
//! 2. A fixed, ordered alias table maps legacy/alternate key names onto
//!    their canonical field when the canonical field is absent. The first
//!    matching alternate wins; an existing canonical value is never
//!    overwritten.
//! 3. Remaining snake_case keys are copied to their camelCase form when
//!    that form is absent.
//!
//! Normalization is a pure function over string-keyed JSON maps and is
//! idempotent.

use serde_json::Value;

use super::Document;

/// Canonical field -> accepted alternates, in priority order.
pub const FIELD_ALIASES: &[(&str, &[&str])] = &[
    ("clientName", &["client_name", "client", "name"]),
    ("eventDate", &["event_date", "date"]),
    ("eventType", &["event_type", "type"]),
    ("guestCount", &["guest_count", "guests", "total_guests"]),
    ("pricePerPlate", &["price_per_plate", "price_per_head", "ppp"]),
    ("contactEmail", &["contact_email", "email"]),
    ("contactPhone", &["contact_phone", "phone", "mobile_number", "mobile"]),
    ("companyName", &["company_name", "name", "title"]),
    ("itemName", &["item_name", "name"]),
    ("itemDescription", &["item_description", "description"]),
];

/// Normalize a raw stored document into the API-facing record.
pub fn normalize(mut doc: Document) -> Document {
    // 1. Identifier rewriting
    if let Some(id) = doc.get("id").and_then(canonical_id) {
        doc.insert("id".into(), Value::String(id));
    }

    // 2. Fixed alias table
    for (canonical, alternates) in FIELD_ALIASES {
        if doc.contains_key(*canonical) {
            continue;
        }
        if let Some(value) = alternates.iter().find_map(|alt| doc.get(*alt)) {
            let value = value.clone();
            doc.insert((*canonical).to_string(), value);
        }
    }

    // 3. Generic snake_case -> camelCase promotion
    let snake_keys: Vec<String> = doc.keys().filter(|k| k.contains('_')).cloned().collect();
    for key in snake_keys {
        let camel = snake_to_camel(&key);
        if camel != key && !doc.contains_key(&camel) {
            let value = doc[&key].clone();
            doc.insert(camel, value);
        }
    }

    doc
}

/// Normalize an optional document; `None` passes through.
pub fn normalize_opt(doc: Option<Document>) -> Option<Document> {
    doc.map(normalize)
}

/// Extract the public id string, stripping any `table:key` prefix and
/// the store's angle-bracket key quoting.
fn canonical_id(value: &Value) -> Option<String> {
    let raw = value.as_str()?;
    let key = match raw.split_once(':') {
        Some((_, key)) => key,
        None => raw,
    };
    Some(key.trim_start_matches('⟨').trim_end_matches('⟩').to_string())
}

fn snake_to_camel(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut chars = key.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '_'
            && let Some(next) = chars.peek().copied()
            && next.is_ascii_lowercase()
        {
            out.push(next.to_ascii_uppercase());
            chars.next();
        } else {
            out.push(c);
        }
    }
    out
}
