//! Booking access code payload

use serde::{Deserialize, Serialize};

use crate::utils::AppError;
use crate::utils::validation::{validate_iso_date, validate_opt_text, validate_text};

/// `isUsed` is always serialized, even when false, so storage-level
/// predicates on the flag match freshly created codes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertUserCode {
    pub code: String,
    #[serde(default)]
    pub is_used: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl InsertUserCode {
    pub fn sanitize(&mut self) {
        self.code = self.code.trim().to_string();
    }

    pub fn validate(&self) -> Result<(), AppError> {
        validate_text(&self.code, "code", 4, 20)?;
        if let Some(expires) = &self.expires_at {
            validate_iso_date(expires, "expiresAt")?;
        }
        validate_opt_text(self.notes.as_deref(), "notes", 0, 200)?;
        Ok(())
    }
}
