//! Customer review handlers

use axum::extract::{Path, State};
use serde_json::{Value, json};

use crate::core::ServerState;
use crate::db::{Collection, Document};
use crate::schema::{self, InsertCustomerReview, UpdateCustomerReview};
use crate::utils::time::now_iso;
use crate::utils::{AppError, AppJson, AppResult, Envelope, created, ok};

const NOT_FOUND: &str = "Review not found";

pub async fn list(State(state): State<ServerState>) -> AppResult<Envelope<Vec<Document>>> {
    let reviews = state.storage.list(Collection::Reviews).await?;
    Ok(ok(reviews))
}

pub async fn create(
    State(state): State<ServerState>,
    AppJson(mut payload): AppJson<InsertCustomerReview>,
) -> AppResult<Envelope<Document>> {
    payload.sanitize();
    payload.validate()?;

    let mut doc = schema::to_document(&payload)?;
    doc.insert("createdAt".into(), json!(now_iso()));

    let review = state.storage.create(Collection::Reviews, doc).await?;
    Ok(created(review))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    AppJson(mut payload): AppJson<UpdateCustomerReview>,
) -> AppResult<Envelope<Document>> {
    payload.sanitize();
    payload.validate()?;

    let patch = schema::to_document(&payload)?;
    let review = state
        .storage
        .update(Collection::Reviews, &id, patch)
        .await?
        .ok_or_else(|| AppError::not_found(NOT_FOUND))?;
    Ok(ok(review))
}

pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Envelope<Value>> {
    let deleted = state.storage.delete(Collection::Reviews, &id).await?;
    if !deleted {
        return Err(AppError::not_found(NOT_FOUND));
    }
    Ok(ok(json!({ "success": true })))
}
