use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use super::{
    models::RoomModel,
    repository::{JoinRoomResult, RoomRepository},
    types::RoomResponse,
};
use crate::shared::AppError;

fn room_not_found(room_id: &Uuid) -> AppError {
    AppError::NotFound(format!("Room {} not found", room_id))
}

/// Service for handling room business logic
pub struct RoomService {
    repository: Arc<dyn RoomRepository + Send + Sync>,
}

impl RoomService {
    pub fn new(repository: Arc<dyn RoomRepository + Send + Sync>) -> Self {
        Self { repository }
    }

    /// Always creates a fresh room owned by `owner_name`.
    /// Existing rooms with the same owner are never reused.
    #[instrument(skip(self))]
    pub async fn create_room(&self, owner_name: String) -> Result<RoomResponse, AppError> {
        let room_model = RoomModel::new(owner_name);
        debug!(room_id = %room_model.uid, "Generated room ID");

        self.repository.create_room(&room_model).await?;

        info!(
            room_id = %room_model.uid,
            owner = %room_model.participants[0],
            "Room created successfully"
        );

        Ok(RoomResponse::from(room_model))
    }

    /// Appends a participant to an existing room
    #[instrument(skip(self))]
    pub async fn join_room(&self, room_id: Uuid, name: String) -> Result<RoomResponse, AppError> {
        info!(room_id = %room_id, participant = %name, "Attempting to join room");

        match self.repository.try_join_room(&room_id, &name).await? {
            JoinRoomResult::Success(updated_room) => {
                info!(
                    room_id = %updated_room.uid,
                    participant = %name,
                    participant_count = updated_room.participant_count(),
                    "Participant joined room successfully"
                );
                Ok(RoomResponse::from(updated_room))
            }
            JoinRoomResult::RoomNotFound => Err(room_not_found(&room_id)),
        }
    }

    /// Gets room details as a response object for API endpoints
    #[instrument(skip(self))]
    pub async fn get_room(&self, room_id: Uuid) -> Result<RoomResponse, AppError> {
        let room = self
            .repository
            .get_room(&room_id)
            .await?
            .ok_or_else(|| room_not_found(&room_id))?;

        Ok(RoomResponse::from(room))
    }

    /// Lists every room keyed by its ID
    #[instrument(skip(self))]
    pub async fn list_rooms(&self) -> Result<HashMap<Uuid, RoomResponse>, AppError> {
        debug!("Listing all rooms");

        let rooms = self.repository.list_rooms().await?;

        info!(room_count = rooms.len(), "Rooms retrieved successfully");

        Ok(rooms
            .into_iter()
            .map(|(uid, room)| (uid, RoomResponse::from(room)))
            .collect())
    }
}
