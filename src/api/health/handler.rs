//! Health check handler

use axum::extract::State;
use serde_json::{Value, json};

use crate::core::{ServerState, StorageBackend};
use crate::utils::{Envelope, ok};

pub async fn health(State(state): State<ServerState>) -> Envelope<Value> {
    let backend = match state.config.storage_backend {
        StorageBackend::Persistent => "persistent",
        StorageBackend::Memory => "memory",
    };
    ok(json!({ "status": "ok", "storage": backend }))
}
