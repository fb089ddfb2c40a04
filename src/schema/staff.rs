//! Staff member payloads

use serde::{Deserialize, Serialize};

use crate::utils::AppError;
use crate::utils::validation::{
    sanitize_name, sanitize_phone, validate_opt_text, validate_phone, validate_text,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertStaff {
    pub name: String,
    pub role: String,
    pub phone: String,
}

impl InsertStaff {
    pub fn sanitize(&mut self) {
        self.name = sanitize_name(&self.name);
        self.phone = sanitize_phone(&self.phone);
    }

    pub fn validate(&self) -> Result<(), AppError> {
        validate_text(&self.name, "name", 2, 100)?;
        validate_text(&self.role, "role", 1, 50)?;
        validate_phone(&self.phone, "phone")?;
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStaff {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl UpdateStaff {
    pub fn sanitize(&mut self) {
        if let Some(name) = &self.name {
            self.name = Some(sanitize_name(name));
        }
        if let Some(phone) = &self.phone {
            self.phone = Some(sanitize_phone(phone));
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        validate_opt_text(self.name.as_deref(), "name", 2, 100)?;
        validate_opt_text(self.role.as_deref(), "role", 1, 50)?;
        if let Some(phone) = &self.phone {
            validate_phone(phone, "phone")?;
        }
        Ok(())
    }
}
