//! Booking access code API Module
//!
//! Admin management lives under `/api/user-codes`; the customer-facing
//! verify/consume endpoints live under `/api/codes`.

mod handler;

use axum::{Router, routing::get, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .nest("/api/user-codes", manage_routes())
        .nest("/api/codes", public_routes())
}

fn manage_routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/{id}", axum::routing::delete(handler::delete))
}

fn public_routes() -> Router<ServerState> {
    Router::new()
        .route("/verify", get(handler::verify))
        .route("/use", post(handler::consume))
}
