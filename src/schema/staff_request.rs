//! Staff assignment request payloads
//!
//! Links a staff member to a booking via a shareable response token.
//! When no token is supplied the handler generates one.

use serde::{Deserialize, Serialize};

use crate::utils::AppError;
use crate::utils::validation::{validate_enum, validate_text};

pub const REQUEST_STATUSES: &[&str] = &["pending", "accepted", "rejected"];

fn default_status() -> String {
    "pending".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertStaffRequest {
    pub booking_id: String,
    pub staff_id: String,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl InsertStaffRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        validate_text(&self.booking_id, "bookingId", 1, 100)?;
        validate_text(&self.staff_id, "staffId", 1, 100)?;
        validate_enum(&self.status, "status", REQUEST_STATUSES)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStaffRequest {
    pub status: String,
}

impl UpdateStaffRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        validate_enum(&self.status, "status", REQUEST_STATUSES)
    }
}
