//! Request schemas
//!
//! One module per entity with `Insert*` (creation) and `Update*`
//! (partial-update) payloads. Each payload offers `sanitize()` (trim,
//! cap, digit-strip) and `validate()`; handlers run both before any
//! storage call. Payloads serialize with camelCase keys and omit absent
//! optional fields, so an update merges only the fields the caller sent.

pub mod audit;
pub mod booking;
pub mod booking_item;
pub mod code_request;
pub mod company_info;
pub mod food_item;
pub mod notification;
pub mod review;
pub mod staff;
pub mod staff_request;
pub mod user_code;

pub use audit::InsertAuditEntry;
pub use booking::{InsertEventBooking, UpdateEventBooking};
pub use booking_item::InsertBookingItem;
pub use code_request::{InsertCodeRequest, UpdateCodeRequest};
pub use company_info::UpsertCompanyInfo;
pub use food_item::{InsertFoodItem, UpdateFoodItem};
pub use notification::InsertAdminNotification;
pub use review::{InsertCustomerReview, UpdateCustomerReview};
pub use staff::{InsertStaff, UpdateStaff};
pub use staff_request::{InsertStaffRequest, UpdateStaffRequest};
pub use user_code::InsertUserCode;

use serde::Serialize;
use serde_json::Value;

use crate::db::Document;
use crate::utils::AppError;

/// Serialize a validated payload into a storage document.
pub fn to_document<T: Serialize>(payload: &T) -> Result<Document, AppError> {
    match serde_json::to_value(payload) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(AppError::internal("payload did not serialize to an object")),
        Err(e) => Err(AppError::internal(format!("serialization failed: {e}"))),
    }
}
