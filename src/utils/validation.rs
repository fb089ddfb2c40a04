//! Input validation helpers
//!
//! Centralized sanitizers and validation functions used by the request
//! schemas. Sanitizers run before validation so that length and
//! digit-count checks apply to the cleaned value. Email and URL formats
//! are checked through the validator crate's trait impls.

use validator::{ValidateEmail, ValidateUrl};

use crate::utils::AppError;
use crate::utils::time::is_iso8601;

// ── Text length limits ──────────────────────────────────────────────

/// Names: client, staff, customer, food item (API contract cap)
pub const MAX_NAME_LEN: usize = 100;

/// General free text: descriptions, comments, notes
pub const MAX_TEXT_LEN: usize = 500;

/// Phone numbers after digit-stripping
pub const MAX_PHONE_DIGITS: usize = 15;

/// Minimum digits for a usable phone number
pub const MIN_PHONE_DIGITS: usize = 10;

// ── Sanitizers ──────────────────────────────────────────────────────

/// Trim and cap a name at 100 chars.
pub fn sanitize_name(value: &str) -> String {
    truncate_chars(value.trim(), MAX_NAME_LEN)
}

/// Trim and cap general text at the given length.
pub fn sanitize_text(value: &str, max_len: usize) -> String {
    truncate_chars(value.trim(), max_len)
}

/// Strip all non-digit characters and cap at 15 digits, order preserved.
pub fn sanitize_phone(value: &str) -> String {
    value
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(MAX_PHONE_DIGITS)
        .collect()
}

fn truncate_chars(value: &str, max_len: usize) -> String {
    value.chars().take(max_len).collect()
}

// ── Validation helpers ──────────────────────────────────────────────

/// Required string within inclusive character bounds.
pub fn validate_text(value: &str, field: &str, min: usize, max: usize) -> Result<(), AppError> {
    let len = value.chars().count();
    if len < min {
        return Err(AppError::validation(format!(
            "{field} must be at least {min} characters"
        )));
    }
    if len > max {
        return Err(AppError::validation(format!(
            "{field} must be at most {max} characters"
        )));
    }
    Ok(())
}

/// Optional string within bounds when present.
pub fn validate_opt_text(
    value: Option<&str>,
    field: &str,
    min: usize,
    max: usize,
) -> Result<(), AppError> {
    match value {
        Some(v) => validate_text(v, field, min, max),
        None => Ok(()),
    }
}

/// Integer within inclusive bounds.
pub fn validate_range(value: i64, field: &str, min: i64, max: i64) -> Result<(), AppError> {
    if value < min || value > max {
        return Err(AppError::validation(format!(
            "{field} must be between {min} and {max}"
        )));
    }
    Ok(())
}

/// Optional integer within bounds when present.
pub fn validate_opt_range(
    value: Option<i64>,
    field: &str,
    min: i64,
    max: i64,
) -> Result<(), AppError> {
    match value {
        Some(v) => validate_range(v, field, min, max),
        None => Ok(()),
    }
}

/// Optional integer with only a lower bound.
pub fn validate_opt_min(value: Option<i64>, field: &str, min: i64) -> Result<(), AppError> {
    match value {
        Some(v) if v < min => Err(AppError::validation(format!(
            "{field} must be at least {min}"
        ))),
        _ => Ok(()),
    }
}

/// Exact enum set membership.
pub fn validate_enum(value: &str, field: &str, allowed: &[&str]) -> Result<(), AppError> {
    if allowed.contains(&value) {
        Ok(())
    } else {
        Err(AppError::validation(format!(
            "{field} must be one of: {}",
            allowed.join(", ")
        )))
    }
}

/// Optional enum membership when present.
pub fn validate_opt_enum(
    value: Option<&str>,
    field: &str,
    allowed: &[&str],
) -> Result<(), AppError> {
    match value {
        Some(v) => validate_enum(v, field, allowed),
        None => Ok(()),
    }
}

/// Email address format.
pub fn validate_email(value: &str, field: &str) -> Result<(), AppError> {
    if value.validate_email() {
        Ok(())
    } else {
        Err(AppError::validation(format!(
            "{field} must be a valid email address"
        )))
    }
}

/// URL format, when present.
pub fn validate_opt_url(value: Option<&str>, field: &str) -> Result<(), AppError> {
    match value {
        Some(v) if !v.validate_url() => Err(AppError::validation(format!(
            "{field} must be a valid URL"
        ))),
        _ => Ok(()),
    }
}

/// Phone with at least the minimum digit count (after sanitization).
pub fn validate_phone(value: &str, field: &str) -> Result<(), AppError> {
    if value.len() >= MIN_PHONE_DIGITS {
        Ok(())
    } else {
        Err(AppError::validation(format!(
            "{field} must have at least {MIN_PHONE_DIGITS} digits"
        )))
    }
}

/// ISO-8601 date/datetime, trailing `Z` accepted as UTC.
pub fn validate_iso_date(value: &str, field: &str) -> Result<(), AppError> {
    if is_iso8601(value) {
        Ok(())
    } else {
        Err(AppError::validation(format!(
            "{field} is not a valid ISO-8601 date"
        )))
    }
}

/// `#RRGGBB` hex color.
pub fn validate_hex_color(value: &str, field: &str) -> Result<(), AppError> {
    let valid = value.len() == 7
        && value.starts_with('#')
        && value[1..].chars().all(|c| c.is_ascii_hexdigit());
    if valid {
        Ok(())
    } else {
        Err(AppError::validation(format!("{field} must match #RRGGBB")))
    }
}

/// UPI id: word characters, `-`, `@` and `.` only.
pub fn validate_upi_id(value: &str, field: &str) -> Result<(), AppError> {
    let valid = !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '@' | '.'));
    if valid {
        Ok(())
    } else {
        Err(AppError::validation(format!("{field} has an invalid format")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_strips_formatting() {
        assert_eq!(sanitize_phone("+1 (555) 123-4567"), "15551234567");
    }

    #[test]
    fn phone_caps_at_fifteen_digits() {
        assert_eq!(sanitize_phone("123456789012345678"), "123456789012345");
    }

    #[test]
    fn phone_preserves_order() {
        assert_eq!(sanitize_phone("9a8b7c"), "987");
    }

    #[test]
    fn name_is_trimmed_and_capped() {
        assert_eq!(sanitize_name("  Asha Caterers  "), "Asha Caterers");
        assert_eq!(sanitize_name(&"x".repeat(150)).len(), MAX_NAME_LEN);
    }

    #[test]
    fn text_bounds_are_inclusive() {
        assert!(validate_text("ab", "name", 2, 100).is_ok());
        assert!(validate_text("a", "name", 2, 100).is_err());
        assert!(validate_text(&"x".repeat(100), "name", 2, 100).is_ok());
        assert!(validate_text(&"x".repeat(101), "name", 2, 100).is_err());
    }

    #[test]
    fn enum_membership_is_exact() {
        let statuses = ["pending", "confirmed", "completed", "cancelled"];
        assert!(validate_enum("confirmed", "status", &statuses).is_ok());
        assert!(validate_enum("Confirmed", "status", &statuses).is_err());
    }

    #[test]
    fn hex_color() {
        assert!(validate_hex_color("#A1B2C3", "primaryColor").is_ok());
        assert!(validate_hex_color("#a1b2c3", "primaryColor").is_ok());
        assert!(validate_hex_color("A1B2C3", "primaryColor").is_err());
        assert!(validate_hex_color("#A1B2C", "primaryColor").is_err());
        assert!(validate_hex_color("#A1B2CZ", "primaryColor").is_err());
    }

    #[test]
    fn upi_id() {
        assert!(validate_upi_id("shop-1@upi.bank", "upiId").is_ok());
        assert!(validate_upi_id("has space@upi", "upiId").is_err());
        assert!(validate_upi_id("", "upiId").is_err());
    }

    #[test]
    fn short_phone_rejected() {
        assert!(validate_phone("123456789", "phone").is_err());
        assert!(validate_phone("1234567890", "phone").is_ok());
    }

    #[test]
    fn email_format() {
        assert!(validate_email("client@example.com", "contactEmail").is_ok());
        assert!(validate_email("not-an-email", "contactEmail").is_err());
    }

    #[test]
    fn date_format() {
        assert!(validate_iso_date("2026-06-15T18:30:00Z", "eventDate").is_ok());
        assert!(validate_iso_date("someday", "eventDate").is_err());
    }
}
