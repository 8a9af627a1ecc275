use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::models::RoomModel;

/// Request payload for creating a new room
#[derive(Debug, Deserialize)]
pub struct RoomCreateRequest {
    pub name: String,
}

/// Request payload for joining an existing room
#[derive(Debug, Deserialize)]
pub struct JoinRoomRequest {
    pub uid: Uuid,
    pub name: String,
}

/// Response for every single-room endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomResponse {
    pub uid: Uuid,
    pub participants: Vec<String>,
}

impl From<RoomModel> for RoomResponse {
    fn from(room: RoomModel) -> Self {
        Self {
            uid: room.uid,
            participants: room.participants,
        }
    }
}
