//! Booking code request handlers
//!
//! Creating a request notifies the admin; so does granting one. Both
//! notifications are best-effort: a failure is logged and the request
//! operation still succeeds.

use axum::extract::{Path, State};
use serde_json::{Value, json};

use crate::core::ServerState;
use crate::db::{Collection, Document};
use crate::schema::{self, InsertCodeRequest, UpdateCodeRequest};
use crate::utils::time::now_iso;
use crate::utils::{AppError, AppJson, AppResult, Envelope, created, ok};

const NOT_FOUND: &str = "Request not found";

pub async fn list(State(state): State<ServerState>) -> AppResult<Envelope<Vec<Document>>> {
    let requests = state.storage.get_code_requests().await?;
    Ok(ok(requests))
}

pub async fn create(
    State(state): State<ServerState>,
    AppJson(mut payload): AppJson<InsertCodeRequest>,
) -> AppResult<Envelope<Document>> {
    payload.sanitize();
    payload.validate()?;

    let mut doc = schema::to_document(&payload)?;
    doc.insert("createdAt".into(), json!(now_iso()));

    let request = state.storage.create(Collection::CodeRequests, doc).await?;

    let customer = request
        .get("customerName")
        .and_then(Value::as_str)
        .unwrap_or("A customer");
    notify(
        &state,
        "New Booking Code Request",
        &format!("Customer {customer} has requested a booking code."),
    )
    .await;

    Ok(created(request))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    AppJson(mut payload): AppJson<UpdateCodeRequest>,
) -> AppResult<Envelope<Document>> {
    payload.sanitize();
    payload.validate()?;

    let granting = payload.status.as_deref() == Some("granted");
    let patch = schema::to_document(&payload)?;
    let request = state
        .storage
        .update(Collection::CodeRequests, &id, patch)
        .await?
        .ok_or_else(|| AppError::not_found(NOT_FOUND))?;

    if granting {
        let customer = request
            .get("customerName")
            .and_then(Value::as_str)
            .unwrap_or("A customer");
        notify(
            &state,
            "Booking Code Request Granted",
            &format!("Booking code request from {customer} was granted."),
        )
        .await;
    }

    Ok(ok(request))
}

/// Best-effort admin notification.
async fn notify(state: &ServerState, title: &str, message: &str) {
    let mut doc = serde_json::Map::new();
    doc.insert("type".into(), json!("booking"));
    doc.insert("title".into(), json!(title));
    doc.insert("message".into(), json!(message));
    doc.insert("read".into(), json!(false));
    doc.insert("createdAt".into(), json!(now_iso()));

    if let Err(e) = state.storage.create(Collection::Notifications, doc).await {
        tracing::warn!("Failed to create admin notification: {}", e);
    }
}
