//! Food item payloads

use serde::{Deserialize, Serialize};

use crate::utils::AppError;
use crate::utils::validation::{
    MAX_TEXT_LEN, sanitize_name, sanitize_text, validate_enum, validate_opt_min,
    validate_opt_text, validate_opt_url, validate_text,
};

const FOOD_TYPES: &[&str] = &["Veg", "Non-Veg"];

/// Create a catalog item
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertFoodItem {
    pub name: String,
    pub description: String,
    pub category: String,
    #[serde(rename = "type")]
    pub item_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dietary_tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<i64>,
}

impl InsertFoodItem {
    pub fn sanitize(&mut self) {
        self.name = sanitize_name(&self.name);
        self.description = sanitize_text(&self.description, MAX_TEXT_LEN);
    }

    pub fn validate(&self) -> Result<(), AppError> {
        validate_text(&self.name, "name", 2, 100)?;
        validate_text(&self.description, "description", 10, 500)?;
        validate_text(&self.category, "category", 1, 50)?;
        validate_enum(&self.item_type, "type", FOOD_TYPES)?;
        validate_opt_url(self.image_url.as_deref(), "imageUrl")?;
        validate_opt_min(self.price, "price", 1)?;
        Ok(())
    }
}

/// Partial update for a catalog item
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFoodItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub item_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dietary_tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<i64>,
}

impl UpdateFoodItem {
    pub fn sanitize(&mut self) {
        if let Some(name) = &self.name {
            self.name = Some(sanitize_name(name));
        }
        if let Some(description) = &self.description {
            self.description = Some(sanitize_text(description, MAX_TEXT_LEN));
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        validate_opt_text(self.name.as_deref(), "name", 2, 100)?;
        validate_opt_text(self.description.as_deref(), "description", 10, 500)?;
        validate_opt_text(self.category.as_deref(), "category", 1, 50)?;
        if let Some(item_type) = &self.item_type {
            validate_enum(item_type, "type", FOOD_TYPES)?;
        }
        validate_opt_url(self.image_url.as_deref(), "imageUrl")?;
        validate_opt_min(self.price, "price", 1)?;
        Ok(())
    }
}
