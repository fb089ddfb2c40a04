//! HTTP API modules
//!
//! One module per resource, each exposing a `router()` that nests under
//! its `/api/...` prefix. Routers are merged in
//! [`crate::core::server::build_app`].

pub mod admin;
pub mod audit_history;
pub mod bookings;
pub mod code_requests;
pub mod company_info;
pub mod food_items;
pub mod health;
pub mod notifications;
pub mod reviews;
pub mod staff;
pub mod staff_requests;
pub mod user_codes;
