//! Audit history handlers

use axum::extract::{Query, State};
use serde::Deserialize;
use serde_json::json;

use crate::core::ServerState;
use crate::db::{Collection, Document};
use crate::schema::{self, InsertAuditEntry};
use crate::utils::time::now_iso;
use crate::utils::{AppJson, AppResult, Envelope, created, ok};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditQuery {
    pub entity_type: Option<String>,
    pub entity_id: Option<String>,
}

/// Entries newest-first, optionally filtered by entity type and id.
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<AuditQuery>,
) -> AppResult<Envelope<Vec<Document>>> {
    let entries = state
        .storage
        .get_audit_history(query.entity_type.as_deref(), query.entity_id.as_deref())
        .await?;
    Ok(ok(entries))
}

pub async fn create(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<InsertAuditEntry>,
) -> AppResult<Envelope<Document>> {
    payload.validate()?;

    let mut doc = schema::to_document(&payload)?;
    doc.insert("createdAt".into(), json!(now_iso()));

    let entry = state.storage.create(Collection::AuditHistory, doc).await?;
    Ok(created(entry))
}
