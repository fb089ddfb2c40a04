//! Admin notification handlers

use axum::extract::{Path, State};
use serde_json::{Map, Value, json};

use crate::core::ServerState;
use crate::db::{Collection, Document};
use crate::schema::{self, InsertAdminNotification};
use crate::utils::time::now_iso;
use crate::utils::{AppError, AppJson, AppResult, Envelope, created, ok};

const NOT_FOUND: &str = "Notification not found";

pub async fn list(State(state): State<ServerState>) -> AppResult<Envelope<Vec<Document>>> {
    let notifications = state.storage.list(Collection::Notifications).await?;
    Ok(ok(notifications))
}

pub async fn create(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<InsertAdminNotification>,
) -> AppResult<Envelope<Document>> {
    payload.validate()?;

    let mut doc = schema::to_document(&payload)?;
    doc.insert("createdAt".into(), json!(now_iso()));

    let notification = state.storage.create(Collection::Notifications, doc).await?;
    Ok(created(notification))
}

pub async fn mark_read(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Envelope<Document>> {
    let mut patch = Map::new();
    patch.insert("read".into(), json!(true));

    let notification = state
        .storage
        .update(Collection::Notifications, &id, patch)
        .await?
        .ok_or_else(|| AppError::not_found(NOT_FOUND))?;
    Ok(ok(notification))
}

pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Envelope<Value>> {
    let deleted = state.storage.delete(Collection::Notifications, &id).await?;
    if !deleted {
        return Err(AppError::not_found(NOT_FOUND));
    }
    Ok(ok(json!({ "success": true })))
}
