//! Company profile API Module

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route(
        "/api/company-info",
        get(handler::get).patch(handler::update),
    )
}
