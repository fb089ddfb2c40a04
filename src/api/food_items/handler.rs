//! Food catalog handlers

use axum::extract::{Path, State};
use serde_json::{Value, json};

use crate::core::ServerState;
use crate::db::{Collection, Document};
use crate::schema::{self, InsertFoodItem, UpdateFoodItem};
use crate::utils::time::now_iso;
use crate::utils::{AppError, AppJson, AppResult, Envelope, created, ok};

const NOT_FOUND: &str = "Food item not found";

pub async fn list(State(state): State<ServerState>) -> AppResult<Envelope<Vec<Document>>> {
    let items = state.storage.list(Collection::FoodItems).await?;
    Ok(ok(items))
}

pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Envelope<Document>> {
    let item = state
        .storage
        .get(Collection::FoodItems, &id)
        .await?
        .ok_or_else(|| AppError::not_found(NOT_FOUND))?;
    Ok(ok(item))
}

pub async fn create(
    State(state): State<ServerState>,
    AppJson(mut payload): AppJson<InsertFoodItem>,
) -> AppResult<Envelope<Document>> {
    payload.sanitize();
    payload.validate()?;

    let mut doc = schema::to_document(&payload)?;
    doc.insert("createdAt".into(), json!(now_iso()));

    let item = state.storage.create(Collection::FoodItems, doc).await?;
    Ok(created(item))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    AppJson(mut payload): AppJson<UpdateFoodItem>,
) -> AppResult<Envelope<Document>> {
    payload.sanitize();
    payload.validate()?;

    let patch = schema::to_document(&payload)?;
    let item = state
        .storage
        .update(Collection::FoodItems, &id, patch)
        .await?
        .ok_or_else(|| AppError::not_found(NOT_FOUND))?;
    Ok(ok(item))
}

pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Envelope<Value>> {
    let deleted = state.storage.delete(Collection::FoodItems, &id).await?;
    if !deleted {
        return Err(AppError::not_found(NOT_FOUND));
    }
    Ok(ok(json!({ "success": true })))
}
