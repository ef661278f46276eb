//! Employee API module

mod handler;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/admin/employee", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/login", post(handler::login))
        .route("/logout", post(handler::logout))
        .route("/", post(handler::create).put(handler::update))
        .route("/page", get(handler::page))
        .route("/editPassword", put(handler::edit_password))
        .route("/status/{status}", post(handler::update_status))
        .route("/{id}", get(handler::get_by_id))
}
