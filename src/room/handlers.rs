use axum::{
    extract::{Path, State},
    Json,
};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, instrument};
use uuid::Uuid;

use super::{
    service::RoomService,
    types::{JoinRoomRequest, RoomCreateRequest, RoomResponse},
};
use crate::shared::{AppError, AppState};

/// HTTP handler for creating a new room
///
/// POST /join-or-create-room (also POST /create-room)
/// Always creates a room with the caller as its first participant
#[instrument(name = "create_room", skip(state))]
pub async fn create_room(
    State(state): State<AppState>,
    Json(request): Json<RoomCreateRequest>,
) -> Result<Json<RoomResponse>, AppError> {
    info!(owner = %request.name, "Creating new room");

    let service = RoomService::new(Arc::clone(&state.room_repository));
    let room = service.create_room(request.name).await?;

    Ok(Json(room))
}

/// HTTP handler for joining an existing room
///
/// POST /join-room
/// Returns 404 when the room does not exist
#[instrument(name = "join_room", skip(state))]
pub async fn join_room(
    State(state): State<AppState>,
    Json(request): Json<JoinRoomRequest>,
) -> Result<Json<RoomResponse>, AppError> {
    let service = RoomService::new(Arc::clone(&state.room_repository));
    let room = service.join_room(request.uid, request.name).await?;

    Ok(Json(room))
}

/// GET /room/:uid
#[instrument(name = "get_room", skip(state))]
pub async fn get_room(
    State(state): State<AppState>,
    Path(uid): Path<Uuid>,
) -> Result<Json<RoomResponse>, AppError> {
    let service = RoomService::new(Arc::clone(&state.room_repository));
    let room = service.get_room(uid).await?;

    Ok(Json(room))
}

/// HTTP handler for listing all rooms
///
/// GET /rooms
/// Returns an object keyed by room ID
#[instrument(name = "list_rooms", skip(state))]
pub async fn list_rooms(
    State(state): State<AppState>,
) -> Result<Json<HashMap<Uuid, RoomResponse>>, AppError> {
    info!("Listing all rooms");

    let service = RoomService::new(Arc::clone(&state.room_repository));
    let rooms = service.list_rooms().await?;

    info!(room_count = rooms.len(), "Rooms listed successfully");

    Ok(Json(rooms))
}
