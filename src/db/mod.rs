//! Storage layer
//!
//! One collection per entity type, schemaless JSON documents, two
//! interchangeable backends behind the [`Storage`] trait:
//!
//! - [`SurrealStorage`] - embedded persistent document store
//! - [`MemoryStorage`] - process-local ephemeral maps (dev/test)
//!
//! Both backends return documents already passed through the
//! [`normalize`] step, so the externally observed shape is identical.

pub mod memory;
pub mod normalize;
pub mod storage;
pub mod surreal;

pub use memory::MemoryStorage;
pub use normalize::{normalize, normalize_opt};
pub use storage::{Filter, Storage};
pub use surreal::SurrealStorage;

use serde_json::Value;
use thiserror::Error;

/// A stored document: a string-keyed JSON map.
pub type Document = serde_json::Map<String, Value>;

/// Entity collections. Each maps to one table/map in the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    FoodItems,
    Bookings,
    BookingItems,
    CompanyInfo,
    Staff,
    Reviews,
    Notifications,
    StaffRequests,
    AuditHistory,
    UserCodes,
    CodeRequests,
}

impl Collection {
    /// Backend table name
    pub fn table(&self) -> &'static str {
        match self {
            Collection::FoodItems => "food_items",
            Collection::Bookings => "event_bookings",
            Collection::BookingItems => "booking_items",
            Collection::CompanyInfo => "company_info",
            Collection::Staff => "staff",
            Collection::Reviews => "customer_reviews",
            Collection::Notifications => "admin_notifications",
            Collection::StaffRequests => "staff_booking_requests",
            Collection::AuditHistory => "audit_history",
            Collection::UserCodes => "user_codes",
            Collection::CodeRequests => "code_requests",
        }
    }

    /// All collections (memory backend initialization)
    pub const ALL: [Collection; 11] = [
        Collection::FoodItems,
        Collection::Bookings,
        Collection::BookingItems,
        Collection::CompanyInfo,
        Collection::Staff,
        Collection::Reviews,
        Collection::Notifications,
        Collection::StaffRequests,
        Collection::AuditHistory,
        Collection::UserCodes,
        Collection::CodeRequests,
    ];
}

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Fill in derived booking amounts when absent:
/// `totalAmount = guestCount * pricePerPlate`,
/// `advanceAmount = round(0.5 * totalAmount)`.
pub fn apply_amount_defaults(doc: &mut Document) {
    let guests = doc.get("guestCount").and_then(Value::as_i64);
    let price = doc.get("pricePerPlate").and_then(Value::as_i64);

    let total_missing = !doc.get("totalAmount").is_some_and(Value::is_number);
    if total_missing
        && let (Some(guests), Some(price)) = (guests, price)
    {
        doc.insert("totalAmount".into(), Value::from(guests * price));
    }

    let advance_missing = !doc.get("advanceAmount").is_some_and(Value::is_number);
    if advance_missing
        && let Some(total) = doc.get("totalAmount").and_then(Value::as_i64)
    {
        let advance = (total as f64 * 0.5).round() as i64;
        doc.insert("advanceAmount".into(), Value::from(advance));
    }
}

/// Sort documents newest-first by their `createdAt` RFC 3339 string.
pub(crate) fn sort_by_created_desc(docs: &mut [Document]) {
    docs.sort_by(|a, b| {
        let a_key = a.get("createdAt").and_then(Value::as_str).unwrap_or("");
        let b_key = b.get("createdAt").and_then(Value::as_str).unwrap_or("");
        b_key.cmp(a_key)
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn booking(guests: i64, price: i64) -> Document {
        let mut doc = Document::new();
        doc.insert("guestCount".into(), json!(guests));
        doc.insert("pricePerPlate".into(), json!(price));
        doc
    }

    #[test]
    fn amounts_derived_when_absent() {
        let mut doc = booking(100, 500);
        apply_amount_defaults(&mut doc);
        assert_eq!(doc["totalAmount"], json!(50000));
        assert_eq!(doc["advanceAmount"], json!(25000));
    }

    #[test]
    fn advance_rounds_half_up() {
        let mut doc = booking(5, 101); // total 505, half 252.5
        apply_amount_defaults(&mut doc);
        assert_eq!(doc["totalAmount"], json!(505));
        assert_eq!(doc["advanceAmount"], json!(253));
    }

    #[test]
    fn explicit_amounts_untouched() {
        let mut doc = booking(100, 500);
        doc.insert("totalAmount".into(), json!(42000));
        doc.insert("advanceAmount".into(), json!(10000));
        apply_amount_defaults(&mut doc);
        assert_eq!(doc["totalAmount"], json!(42000));
        assert_eq!(doc["advanceAmount"], json!(10000));
    }

    #[test]
    fn advance_derived_from_explicit_total() {
        let mut doc = booking(10, 100);
        doc.insert("totalAmount".into(), json!(900));
        apply_amount_defaults(&mut doc);
        assert_eq!(doc["advanceAmount"], json!(450));
    }

    #[test]
    fn null_amount_counts_as_absent() {
        let mut doc = booking(10, 100);
        doc.insert("totalAmount".into(), Value::Null);
        apply_amount_defaults(&mut doc);
        assert_eq!(doc["totalAmount"], json!(1000));
    }

    #[test]
    fn sorted_newest_first() {
        let mut docs: Vec<Document> = ["2026-01-01T00:00:00Z", "2026-03-01T00:00:00Z", "2026-02-01T00:00:00Z"]
            .iter()
            .map(|ts| {
                let mut d = Document::new();
                d.insert("createdAt".into(), json!(ts));
                d
            })
            .collect();
        sort_by_created_desc(&mut docs);
        assert_eq!(docs[0]["createdAt"], json!("2026-03-01T00:00:00Z"));
        assert_eq!(docs[2]["createdAt"], json!("2026-01-01T00:00:00Z"));
    }
}
