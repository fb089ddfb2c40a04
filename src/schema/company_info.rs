//! Company profile payload
//!
//! A single-document resource. Every field is optional so the admin UI
//! can save one section at a time.

use serde::{Deserialize, Serialize};

use crate::utils::AppError;
use crate::utils::validation::{
    sanitize_name, sanitize_phone, sanitize_text, validate_email, validate_hex_color,
    validate_opt_range, validate_opt_text, validate_opt_url, validate_phone, validate_upi_id,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpsertCompanyInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events_per_year: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub years_experience: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upi_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_advance_booking_days: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
}

impl UpsertCompanyInfo {
    pub fn sanitize(&mut self) {
        if let Some(name) = &self.company_name {
            self.company_name = Some(sanitize_name(name));
        }
        if let Some(tagline) = &self.tagline {
            self.tagline = Some(sanitize_text(tagline, 200));
        }
        if let Some(description) = &self.description {
            self.description = Some(sanitize_text(description, 2000));
        }
        if let Some(phone) = &self.phone {
            self.phone = Some(sanitize_phone(phone));
        }
        if let Some(address) = &self.address {
            self.address = Some(sanitize_text(address, 500));
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        validate_opt_text(self.company_name.as_deref(), "companyName", 1, 100)?;
        validate_opt_text(self.tagline.as_deref(), "tagline", 0, 200)?;
        validate_opt_text(self.description.as_deref(), "description", 0, 2000)?;
        if let Some(email) = &self.email {
            validate_email(email, "email")?;
        }
        if let Some(phone) = &self.phone {
            validate_phone(phone, "phone")?;
        }
        validate_opt_text(self.address.as_deref(), "address", 0, 500)?;
        validate_opt_range(self.events_per_year, "eventsPerYear", 0, 100000)?;
        validate_opt_range(self.years_experience, "yearsExperience", 0, 100)?;
        validate_opt_url(self.website_url.as_deref(), "websiteUrl")?;
        if let Some(upi) = &self.upi_id {
            validate_upi_id(upi, "upiId")?;
        }
        validate_opt_range(
            self.min_advance_booking_days,
            "minAdvanceBookingDays",
            0,
            30,
        )?;
        if let Some(color) = &self.primary_color {
            validate_hex_color(color, "primaryColor")?;
        }
        validate_opt_url(self.logo_url.as_deref(), "logoUrl")?;
        Ok(())
    }
}
