//! Customer review payloads

use serde::{Deserialize, Serialize};

use crate::utils::AppError;
use crate::utils::validation::{
    MAX_TEXT_LEN, sanitize_name, sanitize_text, validate_opt_range, validate_opt_text,
    validate_range, validate_text,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertCustomerReview {
    pub customer_name: String,
    pub event_type: String,
    pub rating: i64,
    pub comment: String,
}

impl InsertCustomerReview {
    pub fn sanitize(&mut self) {
        self.customer_name = sanitize_name(&self.customer_name);
        self.comment = sanitize_text(&self.comment, MAX_TEXT_LEN);
    }

    pub fn validate(&self) -> Result<(), AppError> {
        validate_text(&self.customer_name, "customerName", 1, 100)?;
        validate_text(&self.event_type, "eventType", 1, 50)?;
        validate_range(self.rating, "rating", 1, 5)?;
        validate_text(&self.comment, "comment", 10, MAX_TEXT_LEN)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCustomerReview {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl UpdateCustomerReview {
    pub fn sanitize(&mut self) {
        if let Some(name) = &self.customer_name {
            self.customer_name = Some(sanitize_name(name));
        }
        if let Some(comment) = &self.comment {
            self.comment = Some(sanitize_text(comment, MAX_TEXT_LEN));
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        validate_opt_text(self.customer_name.as_deref(), "customerName", 1, 100)?;
        validate_opt_text(self.event_type.as_deref(), "eventType", 1, 50)?;
        validate_opt_range(self.rating, "rating", 1, 5)?;
        validate_opt_text(self.comment.as_deref(), "comment", 10, MAX_TEXT_LEN)?;
        Ok(())
    }
}
