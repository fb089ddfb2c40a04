//! Staff assignment request API Module

mod handler;

use axum::{Router, routing::get, routing::patch, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/staff-requests", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", post(handler::create))
        .route("/{id}", patch(handler::update))
        .route("/token/{token}", get(handler::get_by_token))
}
