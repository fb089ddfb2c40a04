//! Event booking API Module

mod handler;

use axum::{Router, routing::delete, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/bookings", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route(
            "/{id}",
            get(handler::get_by_id)
                .patch(handler::update)
                .delete(handler::delete),
        )
        .route(
            "/{id}/items",
            get(handler::list_items)
                .post(handler::add_item)
                .delete(handler::clear_items),
        )
        .route("/{id}/staff-requests", get(handler::list_staff_requests))
        .route(
            "/{id}/staff-requests/{staff_id}",
            delete(handler::remove_staff_request),
        )
        .route("/{id}/accepted-staff", get(handler::accepted_staff))
}
