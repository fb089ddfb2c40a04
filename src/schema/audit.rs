//! Audit history payload

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::utils::AppError;
use crate::utils::validation::{validate_enum, validate_text};

pub const AUDIT_ENTITY_TYPES: &[&str] = &["booking", "staff", "payment", "assignment"];

fn default_details() -> Value {
    Value::Object(serde_json::Map::new())
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertAuditEntry {
    pub action: String,
    pub entity_type: String,
    pub entity_id: String,
    #[serde(default = "default_details")]
    pub details: Value,
}

impl InsertAuditEntry {
    pub fn validate(&self) -> Result<(), AppError> {
        validate_text(&self.action, "action", 1, 100)?;
        validate_enum(&self.entity_type, "entityType", AUDIT_ENTITY_TYPES)?;
        validate_text(&self.entity_id, "entityId", 1, 100)?;
        Ok(())
    }
}
