//! Admin notification API Module

mod handler;

use axum::{Router, routing::delete, routing::get, routing::patch};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/notifications", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/{id}/read", patch(handler::mark_read))
        .route("/{id}", delete(handler::delete))
}
