//! Admin notification payload

use serde::{Deserialize, Serialize};

use crate::utils::AppError;
use crate::utils::validation::{validate_enum, validate_text};

pub const NOTIFICATION_TYPES: &[&str] = &["booking", "payment"];

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertAdminNotification {
    #[serde(rename = "type")]
    pub notification_type: String,
    pub title: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking_id: Option<String>,
    #[serde(default)]
    pub read: bool,
}

impl InsertAdminNotification {
    pub fn validate(&self) -> Result<(), AppError> {
        validate_enum(&self.notification_type, "type", NOTIFICATION_TYPES)?;
        validate_text(&self.title, "title", 1, 200)?;
        validate_text(&self.message, "message", 1, 1000)?;
        Ok(())
    }
}
