// Library crate for the room registry server
// This file exposes the public API for integration tests

pub mod config;
pub mod room;
pub mod shared;

use axum::{routing::get, Router};
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

// Re-export commonly used types for easier access in tests
pub use config::{ConfigError, ServerConfig};
pub use room::{
    models::RoomModel,
    repository::{InMemoryRoomRepository, RoomRepository},
};
pub use shared::{AppError, AppState};

/// Builds the full HTTP application: room routes, CORS and request tracing
pub fn app(state: AppState, config: &ServerConfig) -> Router {
    // Credentials rule out wildcards, so requested methods and headers are echoed back
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(config.cors_origins.clone()))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request());

    Router::new()
        .route("/", get(|| async { "Room registry is running" }))
        .merge(room::router())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
