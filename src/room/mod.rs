// Public API - what other modules can use
pub use handlers::{create_room, get_room, join_room, list_rooms};

// Internal modules
mod handlers;
pub mod models;
pub mod repository;
pub mod service;
pub mod types;

use axum::{
    routing::{get, post},
    Router,
};

use crate::shared::AppState;

/// Room endpoints, state still to be supplied by the caller
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/join-or-create-room", post(create_room))
        .route("/create-room", post(create_room))
        .route("/join-room", post(join_room))
        .route("/room/:uid", get(get_room))
        .route("/rooms", get(list_rooms))
}
