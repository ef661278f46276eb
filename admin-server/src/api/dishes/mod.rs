//! Dish API module

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/admin/dish", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route(
            "/",
            post(handler::create)
                .put(handler::update)
                .delete(handler::remove),
        )
        .route("/page", get(handler::page))
        .route("/list", get(handler::list))
        .route("/status/{status}", post(handler::update_status))
        .route("/{id}", get(handler::get_by_id))
}
