//! Staff assignment request handlers
//!
//! Each request carries a token the staff member uses to look up and
//! answer the request without logging in.

use axum::extract::{Path, State};
use serde_json::json;
use uuid::Uuid;

use crate::core::ServerState;
use crate::db::{Collection, Document};
use crate::schema::{self, InsertStaffRequest, UpdateStaffRequest};
use crate::utils::time::now_iso;
use crate::utils::{AppError, AppJson, AppResult, Envelope, created, ok};

const NOT_FOUND: &str = "Request not found";

pub async fn create(
    State(state): State<ServerState>,
    AppJson(mut payload): AppJson<InsertStaffRequest>,
) -> AppResult<Envelope<Document>> {
    payload.validate()?;

    if payload.token.is_none() {
        payload.token = Some(Uuid::new_v4().simple().to_string());
    }

    let mut doc = schema::to_document(&payload)?;
    doc.insert("createdAt".into(), json!(now_iso()));

    let request = state.storage.create(Collection::StaffRequests, doc).await?;
    Ok(created(request))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    AppJson(payload): AppJson<UpdateStaffRequest>,
) -> AppResult<Envelope<Document>> {
    payload.validate()?;

    let patch = schema::to_document(&payload)?;
    let request = state
        .storage
        .update(Collection::StaffRequests, &id, patch)
        .await?
        .ok_or_else(|| AppError::not_found(NOT_FOUND))?;
    Ok(ok(request))
}

pub async fn get_by_token(
    State(state): State<ServerState>,
    Path(token): Path<String>,
) -> AppResult<Envelope<Document>> {
    let request = state
        .storage
        .get_staff_request_by_token(&token)
        .await?
        .ok_or_else(|| AppError::not_found(NOT_FOUND))?;
    Ok(ok(request))
}
