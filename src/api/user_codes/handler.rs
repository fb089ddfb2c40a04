//! Booking access code handlers

use axum::extract::{Path, Query, State};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::core::ServerState;
use crate::db::{Collection, Document};
use crate::schema::{self, InsertUserCode};
use crate::utils::time::now_iso;
use crate::utils::{AppError, AppJson, AppResult, Envelope, created, ok};

const NOT_FOUND: &str = "User code not found";

pub async fn list(State(state): State<ServerState>) -> AppResult<Envelope<Vec<Document>>> {
    let codes = state.storage.list(Collection::UserCodes).await?;
    Ok(ok(codes))
}

pub async fn create(
    State(state): State<ServerState>,
    AppJson(mut payload): AppJson<InsertUserCode>,
) -> AppResult<Envelope<Document>> {
    payload.sanitize();
    payload.validate()?;

    let mut doc = schema::to_document(&payload)?;
    doc.insert("createdAt".into(), json!(now_iso()));

    let code = state.storage.create(Collection::UserCodes, doc).await?;
    Ok(created(code))
}

pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Envelope<Value>> {
    let deleted = state.storage.delete(Collection::UserCodes, &id).await?;
    if !deleted {
        return Err(AppError::not_found(NOT_FOUND));
    }
    Ok(ok(json!({ "success": true })))
}

// ── Customer-facing endpoints ───────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct VerifyQuery {
    pub code: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UseCodeRequest {
    pub code: Option<String>,
}

/// Check that a code exists and is still unused.
pub async fn verify(
    State(state): State<ServerState>,
    Query(query): Query<VerifyQuery>,
) -> AppResult<Envelope<Document>> {
    let code = query
        .code
        .filter(|c| !c.is_empty())
        .ok_or_else(|| AppError::validation("Code is required"))?;

    let valid = state
        .storage
        .get_user_code_by_value(&code)
        .await?
        .ok_or_else(|| AppError::not_found("Invalid or used code"))?;
    Ok(ok(valid))
}

/// Consume a code. At most one caller succeeds per code; retries and
/// races see a 404.
pub async fn consume(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<UseCodeRequest>,
) -> AppResult<Envelope<Value>> {
    let code = payload
        .code
        .filter(|c| !c.is_empty())
        .ok_or_else(|| AppError::validation("Code is required"))?;

    let consumed = state.storage.mark_code_as_used(&code).await?;
    if !consumed {
        return Err(AppError::not_found("Code not found or already used"));
    }
    Ok(ok(json!({ "success": true })))
}
