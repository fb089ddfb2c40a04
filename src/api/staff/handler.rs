//! Staff roster handlers

use axum::extract::{Path, State};
use serde_json::{Value, json};

use crate::core::ServerState;
use crate::db::{Collection, Document};
use crate::schema::{self, InsertStaff, UpdateStaff};
use crate::utils::time::now_iso;
use crate::utils::{AppError, AppJson, AppResult, Envelope, created, ok};

const NOT_FOUND: &str = "Staff member not found";

pub async fn list(State(state): State<ServerState>) -> AppResult<Envelope<Vec<Document>>> {
    let staff = state.storage.list(Collection::Staff).await?;
    Ok(ok(staff))
}

pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Envelope<Document>> {
    let member = state
        .storage
        .get(Collection::Staff, &id)
        .await?
        .ok_or_else(|| AppError::not_found(NOT_FOUND))?;
    Ok(ok(member))
}

pub async fn create(
    State(state): State<ServerState>,
    AppJson(mut payload): AppJson<InsertStaff>,
) -> AppResult<Envelope<Document>> {
    payload.sanitize();
    payload.validate()?;

    let mut doc = schema::to_document(&payload)?;
    doc.insert("createdAt".into(), json!(now_iso()));

    let member = state.storage.create(Collection::Staff, doc).await?;
    Ok(created(member))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    AppJson(mut payload): AppJson<UpdateStaff>,
) -> AppResult<Envelope<Document>> {
    payload.sanitize();
    payload.validate()?;

    let patch = schema::to_document(&payload)?;
    let member = state
        .storage
        .update(Collection::Staff, &id, patch)
        .await?
        .ok_or_else(|| AppError::not_found(NOT_FOUND))?;
    Ok(ok(member))
}

pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Envelope<Value>> {
    let deleted = state.storage.delete(Collection::Staff, &id).await?;
    if !deleted {
        return Err(AppError::not_found(NOT_FOUND));
    }
    Ok(ok(json!({ "success": true })))
}
