//! Event booking payloads

use serde::{Deserialize, Serialize};

use crate::utils::AppError;
use crate::utils::validation::{
    sanitize_name, sanitize_phone, sanitize_text, validate_email, validate_iso_date,
    validate_opt_enum, validate_opt_min, validate_opt_range, validate_opt_text, validate_phone,
    validate_range, validate_text,
};

pub const BOOKING_STATUSES: &[&str] = &["pending", "confirmed", "completed", "cancelled"];
pub const PAYMENT_STATUSES: &[&str] = &["pending", "paid"];
pub const APPROVAL_STATUSES: &[&str] = &["pending", "approved", "rejected"];

fn default_serving_boys() -> i64 {
    2
}

/// Create an event booking
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertEventBooking {
    pub client_name: String,
    pub event_date: String,
    pub event_type: String,
    pub guest_count: i64,
    pub price_per_plate: i64,
    #[serde(default = "default_serving_boys")]
    pub serving_boys_needed: i64,
    pub contact_email: String,
    pub contact_phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_requests: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advance_amount: Option<i64>,
}

impl InsertEventBooking {
    pub fn sanitize(&mut self) {
        self.client_name = sanitize_name(&self.client_name);
        self.contact_phone = sanitize_phone(&self.contact_phone);
        if let Some(requests) = &self.special_requests {
            self.special_requests = Some(sanitize_text(requests, 1000));
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        validate_text(&self.client_name, "clientName", 2, 100)?;
        validate_iso_date(&self.event_date, "eventDate")?;
        validate_text(&self.event_type, "eventType", 1, 50)?;
        validate_range(self.guest_count, "guestCount", 1, 10000)?;
        validate_range(self.price_per_plate, "pricePerPlate", 0, 100000)?;
        validate_range(self.serving_boys_needed, "servingBoysNeeded", 0, 100)?;
        validate_email(&self.contact_email, "contactEmail")?;
        validate_phone(&self.contact_phone, "contactPhone")?;
        validate_opt_text(self.special_requests.as_deref(), "specialRequests", 0, 1000)?;
        validate_opt_min(self.total_amount, "totalAmount", 1)?;
        validate_opt_min(self.advance_amount, "advanceAmount", 1)?;
        Ok(())
    }
}

/// Partial update for a booking, including status/payment transitions
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEventBooking {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guest_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_per_plate: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serving_boys_needed: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_requests: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advance_payment_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_payment_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advance_payment_approval_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_payment_approval_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advance_payment_screenshot: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_payment_screenshot: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advance_amount: Option<i64>,
}

impl UpdateEventBooking {
    pub fn sanitize(&mut self) {
        if let Some(name) = &self.client_name {
            self.client_name = Some(sanitize_name(name));
        }
        if let Some(phone) = &self.contact_phone {
            self.contact_phone = Some(sanitize_phone(phone));
        }
        if let Some(requests) = &self.special_requests {
            self.special_requests = Some(sanitize_text(requests, 1000));
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        validate_opt_text(self.client_name.as_deref(), "clientName", 2, 100)?;
        if let Some(date) = &self.event_date {
            validate_iso_date(date, "eventDate")?;
        }
        validate_opt_text(self.event_type.as_deref(), "eventType", 1, 50)?;
        validate_opt_range(self.guest_count, "guestCount", 1, 10000)?;
        validate_opt_range(self.price_per_plate, "pricePerPlate", 0, 100000)?;
        validate_opt_range(self.serving_boys_needed, "servingBoysNeeded", 0, 100)?;
        if let Some(email) = &self.contact_email {
            validate_email(email, "contactEmail")?;
        }
        if let Some(phone) = &self.contact_phone {
            validate_phone(phone, "contactPhone")?;
        }
        validate_opt_text(self.special_requests.as_deref(), "specialRequests", 0, 1000)?;
        validate_opt_enum(self.status.as_deref(), "status", BOOKING_STATUSES)?;
        validate_opt_enum(
            self.advance_payment_status.as_deref(),
            "advancePaymentStatus",
            PAYMENT_STATUSES,
        )?;
        validate_opt_enum(
            self.final_payment_status.as_deref(),
            "finalPaymentStatus",
            PAYMENT_STATUSES,
        )?;
        validate_opt_enum(
            self.advance_payment_approval_status.as_deref(),
            "advancePaymentApprovalStatus",
            APPROVAL_STATUSES,
        )?;
        validate_opt_enum(
            self.final_payment_approval_status.as_deref(),
            "finalPaymentApprovalStatus",
            APPROVAL_STATUSES,
        )?;
        validate_opt_min(self.total_amount, "totalAmount", 1)?;
        validate_opt_min(self.advance_amount, "advanceAmount", 1)?;
        Ok(())
    }
}
