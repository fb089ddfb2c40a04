//! Company profile handlers
//!
//! A singleton document: GET returns it (or an empty object before first
//! save) and PATCH merges into it, creating it on first use.

use axum::extract::State;
use serde_json::{Value, json};

use crate::core::ServerState;
use crate::db::Document;
use crate::schema::{self, UpsertCompanyInfo};
use crate::utils::time::now_iso;
use crate::utils::{AppJson, AppResult, Envelope, ok};

pub async fn get(State(state): State<ServerState>) -> AppResult<Envelope<Value>> {
    let info = state
        .storage
        .get_company_info()
        .await?
        .map(Value::Object)
        .unwrap_or_else(|| json!({}));
    Ok(ok(info))
}

pub async fn update(
    State(state): State<ServerState>,
    AppJson(mut payload): AppJson<UpsertCompanyInfo>,
) -> AppResult<Envelope<Document>> {
    payload.sanitize();
    payload.validate()?;

    let mut patch = schema::to_document(&payload)?;
    if state.storage.get_company_info().await?.is_none() {
        patch.insert("createdAt".into(), json!(now_iso()));
    }

    let info = state.storage.upsert_company_info(patch).await?;
    Ok(ok(info))
}
