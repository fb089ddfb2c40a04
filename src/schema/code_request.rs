//! Booking code request payloads
//!
//! Submitted by prospective customers who want an access code. Admins
//! review the queue and grant or reject each request.

use serde::{Deserialize, Serialize};

use crate::utils::AppError;
use crate::utils::validation::{
    sanitize_name, sanitize_phone, sanitize_text, validate_email, validate_enum,
    validate_opt_enum, validate_opt_text, validate_phone, validate_text,
};

pub const CODE_REQUEST_STATUSES: &[&str] = &["pending", "granted", "rejected"];

fn default_status() -> String {
    "pending".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertCodeRequest {
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_details: Option<String>,
    #[serde(default = "default_status")]
    pub status: String,
}

impl InsertCodeRequest {
    pub fn sanitize(&mut self) {
        self.customer_name = sanitize_name(&self.customer_name);
        self.customer_phone = sanitize_phone(&self.customer_phone);
        if let Some(details) = &self.event_details {
            self.event_details = Some(sanitize_text(details, 1000));
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        validate_text(&self.customer_name, "customerName", 1, 100)?;
        validate_email(&self.customer_email, "customerEmail")?;
        validate_phone(&self.customer_phone, "customerPhone")?;
        validate_opt_text(self.event_details.as_deref(), "eventDetails", 0, 1000)?;
        validate_enum(&self.status, "status", CODE_REQUEST_STATUSES)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCodeRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_details: Option<String>,
}

impl UpdateCodeRequest {
    pub fn sanitize(&mut self) {
        if let Some(details) = &self.event_details {
            self.event_details = Some(sanitize_text(details, 1000));
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        validate_opt_enum(self.status.as_deref(), "status", CODE_REQUEST_STATUSES)?;
        validate_opt_text(self.event_details.as_deref(), "eventDetails", 0, 1000)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> InsertCodeRequest {
        InsertCodeRequest {
            customer_name: "Priya Nair".into(),
            customer_email: "priya@example.com".into(),
            customer_phone: "9876543210".into(),
            event_details: Some("Engagement dinner for 80 guests".into()),
            status: "pending".into(),
        }
    }

    #[test]
    fn accepts_valid_request() {
        let mut request = valid();
        request.sanitize();
        assert!(request.validate().is_ok());
    }

    #[test]
    fn bad_email_rejected() {
        let mut request = valid();
        request.customer_email = "priya_at_example".into();
        request.sanitize();
        assert!(request.validate().is_err());
    }

    #[test]
    fn status_defaults_to_pending() {
        let request: InsertCodeRequest = serde_json::from_value(serde_json::json!({
            "customerName": "Priya Nair",
            "customerEmail": "priya@example.com",
            "customerPhone": "9876543210"
        }))
        .unwrap();
        assert_eq!(request.status, "pending");
    }

    #[test]
    fn update_unknown_status_rejected() {
        let update: UpdateCodeRequest =
            serde_json::from_value(serde_json::json!({"status": "approved"})).unwrap();
        assert!(update.validate().is_err());
    }
}
