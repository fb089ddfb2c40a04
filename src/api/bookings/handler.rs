//! Event booking handlers
//!
//! Bookings own their menu items: deleting a booking clears its items,
//! and the item sub-routes are scoped by the booking id from the path.

use axum::extract::{Path, State};
use serde_json::{Value, json};

use crate::core::ServerState;
use crate::db::{Collection, Document, apply_amount_defaults};
use crate::schema::{self, InsertBookingItem, InsertEventBooking, UpdateEventBooking};
use crate::utils::time::now_iso;
use crate::utils::{AppError, AppJson, AppResult, Envelope, created, ok};

const NOT_FOUND: &str = "Booking not found";

pub async fn list(State(state): State<ServerState>) -> AppResult<Envelope<Vec<Document>>> {
    let bookings = state.storage.list(Collection::Bookings).await?;
    Ok(ok(bookings))
}

pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Envelope<Document>> {
    let booking = state
        .storage
        .get_booking(&id)
        .await?
        .ok_or_else(|| AppError::not_found(NOT_FOUND))?;
    Ok(ok(booking))
}

/// Create a booking. Status, both payment statuses and both payment
/// approval statuses start `pending`; missing amounts are derived from
/// guest count and plate price.
pub async fn create(
    State(state): State<ServerState>,
    AppJson(mut payload): AppJson<InsertEventBooking>,
) -> AppResult<Envelope<Document>> {
    payload.sanitize();
    payload.validate()?;

    let mut doc = schema::to_document(&payload)?;
    doc.insert("status".into(), json!("pending"));
    doc.insert("advancePaymentStatus".into(), json!("pending"));
    doc.insert("finalPaymentStatus".into(), json!("pending"));
    doc.insert("advancePaymentApprovalStatus".into(), json!("pending"));
    doc.insert("finalPaymentApprovalStatus".into(), json!("pending"));
    doc.insert("createdAt".into(), json!(now_iso()));
    apply_amount_defaults(&mut doc);

    let booking = state.storage.create(Collection::Bookings, doc).await?;
    Ok(created(booking))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    AppJson(mut payload): AppJson<UpdateEventBooking>,
) -> AppResult<Envelope<Document>> {
    payload.sanitize();
    payload.validate()?;

    let patch = schema::to_document(&payload)?;
    let booking = state
        .storage
        .update(Collection::Bookings, &id, patch)
        .await?
        .ok_or_else(|| AppError::not_found(NOT_FOUND))?;
    Ok(ok(booking))
}

pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Envelope<Value>> {
    let deleted = state.storage.delete(Collection::Bookings, &id).await?;
    if !deleted {
        return Err(AppError::not_found(NOT_FOUND));
    }
    // Items are owned by the booking and go with it
    state
        .storage
        .delete_where(Collection::BookingItems, &[("bookingId", json!(id))])
        .await?;
    Ok(ok(json!({ "success": true })))
}

// ── Menu items ──────────────────────────────────────────────────────

pub async fn list_items(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Envelope<Vec<Document>>> {
    let items = state
        .storage
        .find(Collection::BookingItems, &[("bookingId", json!(id))])
        .await?;
    Ok(ok(items))
}

pub async fn add_item(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    AppJson(payload): AppJson<InsertBookingItem>,
) -> AppResult<Envelope<Document>> {
    payload.validate()?;

    if state.storage.get(Collection::Bookings, &id).await?.is_none() {
        return Err(AppError::not_found(NOT_FOUND));
    }

    let mut doc = schema::to_document(&payload)?;
    doc.insert("bookingId".into(), json!(id));
    doc.insert("createdAt".into(), json!(now_iso()));

    let item = state.storage.create(Collection::BookingItems, doc).await?;
    Ok(created(item))
}

pub async fn clear_items(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Envelope<Value>> {
    let deleted = state
        .storage
        .delete_where(Collection::BookingItems, &[("bookingId", json!(id))])
        .await?;
    Ok(ok(json!({ "success": true, "deleted": deleted })))
}

// ── Staff assignment ────────────────────────────────────────────────

pub async fn list_staff_requests(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Envelope<Vec<Document>>> {
    let requests = state
        .storage
        .find(Collection::StaffRequests, &[("bookingId", json!(id))])
        .await?;
    Ok(ok(requests))
}

pub async fn remove_staff_request(
    State(state): State<ServerState>,
    Path((id, staff_id)): Path<(String, String)>,
) -> AppResult<Envelope<Value>> {
    let deleted = state
        .storage
        .delete_where(
            Collection::StaffRequests,
            &[("bookingId", json!(id)), ("staffId", json!(staff_id))],
        )
        .await?;
    if deleted == 0 {
        return Err(AppError::not_found("Request not found"));
    }
    Ok(ok(json!({ "success": true })))
}

pub async fn accepted_staff(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Envelope<Vec<Document>>> {
    let staff = state.storage.get_accepted_staff_for_booking(&id).await?;
    Ok(ok(staff))
}
