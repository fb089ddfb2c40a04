//! Admin auth handlers

use axum::extract::State;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::core::ServerState;
use crate::utils::{AppError, AppJson, AppResult, Envelope, ok};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub password: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub current_password: Option<String>,
    pub new_password: Option<String>,
}

pub async fn login(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<LoginRequest>,
) -> AppResult<Envelope<Value>> {
    let password = payload.password.unwrap_or_default();
    if state.auth.verify(&password) {
        Ok(ok(json!({ "success": true })))
    } else {
        Err(AppError::unauthorized("Invalid password"))
    }
}

pub async fn change_password(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<ChangePasswordRequest>,
) -> AppResult<Envelope<Value>> {
    let (Some(current), Some(new)) = (
        payload.current_password.filter(|p| !p.is_empty()),
        payload.new_password.filter(|p| !p.is_empty()),
    ) else {
        return Err(AppError::validation(
            "Current password and new password are required",
        ));
    };

    if !state.auth.verify(&current) {
        return Err(AppError::unauthorized("Current password is incorrect"));
    }

    if new.chars().count() < 6 {
        return Err(AppError::validation(
            "New password must be at least 6 characters",
        ));
    }

    state.auth.update(&new)?;
    tracing::info!("Admin password updated");

    Ok(ok(json!({
        "success": true,
        "message": "Password changed successfully"
    })))
}
