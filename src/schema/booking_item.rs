//! Booking menu selection payloads

use serde::{Deserialize, Serialize};

use crate::utils::AppError;
use crate::utils::validation::validate_text;

fn default_quantity() -> i64 {
    1
}

/// Attach a catalog item to a booking. The booking id comes from the
/// request path, not the body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertBookingItem {
    pub food_item_id: String,
    #[serde(default = "default_quantity")]
    pub quantity: i64,
}

impl InsertBookingItem {
    pub fn validate(&self) -> Result<(), AppError> {
        validate_text(&self.food_item_id, "foodItemId", 1, 100)?;
        if self.quantity < 1 {
            return Err(AppError::validation("quantity must be at least 1"));
        }
        Ok(())
    }
}
