use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use tracing::{debug, error, info, instrument, warn};
use uuid::Uuid;

use super::models::RoomModel;
use crate::shared::AppError;

/// Result of attempting to join a room
#[derive(Debug, Clone)]
pub enum JoinRoomResult {
    /// Successfully joined the room, returns updated room data
    Success(RoomModel),
    /// Room does not exist
    RoomNotFound,
}

/// Trait for room repository operations
#[async_trait]
pub trait RoomRepository {
    async fn create_room(&self, room: &RoomModel) -> Result<(), AppError>;
    async fn get_room(&self, room_id: &Uuid) -> Result<Option<RoomModel>, AppError>;
    async fn list_rooms(&self) -> Result<HashMap<Uuid, RoomModel>, AppError>;

    /// Atomically appends a participant, so concurrent joins never lose an update
    async fn try_join_room(
        &self,
        room_id: &Uuid,
        participant: &str,
    ) -> Result<JoinRoomResult, AppError>;
}

/// In-memory implementation of RoomRepository. Rooms live for the process lifetime.
pub struct InMemoryRoomRepository {
    rooms: Mutex<HashMap<Uuid, RoomModel>>,
}

impl Default for InMemoryRoomRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRoomRepository {
    /// Creates a new empty in-memory repository
    pub fn new() -> Self {
        Self {
            rooms: Mutex::new(HashMap::new()),
        }
    }

    fn rooms(&self) -> Result<MutexGuard<'_, HashMap<Uuid, RoomModel>>, AppError> {
        self.rooms.lock().map_err(|_| {
            error!("Room registry lock poisoned");
            AppError::Internal
        })
    }
}

#[async_trait]
impl RoomRepository for InMemoryRoomRepository {
    #[instrument(skip(self, room))]
    async fn create_room(&self, room: &RoomModel) -> Result<(), AppError> {
        debug!(room_id = %room.uid, "Creating room in memory");

        let mut rooms = self.rooms()?;
        if rooms.contains_key(&room.uid) {
            // v4 collisions are not expected; refuse rather than overwrite
            warn!(room_id = %room.uid, "Room already exists in memory");
            return Err(AppError::Internal);
        }
        rooms.insert(room.uid, room.clone());

        debug!(room_id = %room.uid, "Room created successfully in memory");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_room(&self, room_id: &Uuid) -> Result<Option<RoomModel>, AppError> {
        debug!(room_id = %room_id, "Fetching room from memory");

        let rooms = self.rooms()?;
        let room = rooms.get(room_id).cloned();

        match &room {
            Some(r) => debug!(
                room_id = %room_id,
                participant_count = r.participant_count(),
                "Room found in memory"
            ),
            None => debug!(room_id = %room_id, "Room not found in memory"),
        }

        Ok(room)
    }

    #[instrument(skip(self))]
    async fn list_rooms(&self) -> Result<HashMap<Uuid, RoomModel>, AppError> {
        debug!("Listing all rooms in memory");

        let snapshot = self.rooms()?.clone();

        debug!(room_count = snapshot.len(), "Rooms listed successfully in memory");
        Ok(snapshot)
    }

    #[instrument(skip(self))]
    async fn try_join_room(
        &self,
        room_id: &Uuid,
        participant: &str,
    ) -> Result<JoinRoomResult, AppError> {
        debug!(room_id = %room_id, participant = %participant, "Attempting to join room atomically");

        let mut rooms = self.rooms()?;

        let room = match rooms.get_mut(room_id) {
            Some(room) => room,
            None => {
                debug!(room_id = %room_id, "Room not found");
                return Ok(JoinRoomResult::RoomNotFound);
            }
        };

        room.add_participant(participant.to_string());
        let updated_room = room.clone();

        info!(
            room_id = %room_id,
            participant = %participant,
            participant_count = updated_room.participant_count(),
            "Participant joined room (atomic)"
        );

        Ok(JoinRoomResult::Success(updated_room))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_create_and_get_room() {
        let repo = InMemoryRoomRepository::new();
        let room = RoomModel::new("Alice".to_string());

        repo.create_room(&room).await.unwrap();

        let fetched = repo.get_room(&room.uid).await.unwrap();
        assert_eq!(fetched, Some(room));
    }

    #[tokio::test]
    async fn test_create_duplicate_id_is_rejected() {
        let repo = InMemoryRoomRepository::new();
        let room = RoomModel::new("Alice".to_string());

        repo.create_room(&room).await.unwrap();
        let result = repo.create_room(&room).await;

        assert!(matches!(result, Err(AppError::Internal)));
    }

    #[tokio::test]
    async fn test_get_unknown_room_returns_none() {
        let repo = InMemoryRoomRepository::new();
        let result = repo.get_room(&Uuid::new_v4()).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_list_rooms_empty() {
        let repo = InMemoryRoomRepository::new();
        assert!(repo.list_rooms().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_rooms_returns_snapshot() {
        let repo = InMemoryRoomRepository::new();
        let room = RoomModel::new("Alice".to_string());
        repo.create_room(&room).await.unwrap();

        let snapshot = repo.list_rooms().await.unwrap();
        repo.try_join_room(&room.uid, "Bob").await.unwrap();

        // Later joins do not leak into an earlier snapshot
        assert_eq!(snapshot[&room.uid].participants, vec!["Alice"]);
    }

    #[tokio::test]
    async fn test_try_join_room_appends() {
        let repo = InMemoryRoomRepository::new();
        let room = RoomModel::new("Alice".to_string());
        repo.create_room(&room).await.unwrap();

        match repo.try_join_room(&room.uid, "Bob").await.unwrap() {
            JoinRoomResult::Success(updated) => {
                assert_eq!(updated.participants, vec!["Alice", "Bob"]);
            }
            JoinRoomResult::RoomNotFound => panic!("Expected successful join"),
        }

        let stored = repo.get_room(&room.uid).await.unwrap().unwrap();
        assert_eq!(stored.participants, vec!["Alice", "Bob"]);
    }

    #[tokio::test]
    async fn test_try_join_room_allows_duplicate_names() {
        let repo = InMemoryRoomRepository::new();
        let room = RoomModel::new("Alice".to_string());
        repo.create_room(&room).await.unwrap();

        repo.try_join_room(&room.uid, "Alice").await.unwrap();

        let stored = repo.get_room(&room.uid).await.unwrap().unwrap();
        assert_eq!(stored.participants, vec!["Alice", "Alice"]);
    }

    #[tokio::test]
    async fn test_try_join_unknown_room() {
        let repo = InMemoryRoomRepository::new();
        let result = repo.try_join_room(&Uuid::new_v4(), "Bob").await.unwrap();
        assert!(matches!(result, JoinRoomResult::RoomNotFound));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_joins_lose_no_updates() {
        let repo = Arc::new(InMemoryRoomRepository::new());
        let room = RoomModel::new("owner".to_string());
        repo.create_room(&room).await.unwrap();

        let joins = 64;
        let mut handles = Vec::new();
        for i in 0..joins {
            let repo = Arc::clone(&repo);
            let uid = room.uid;
            handles.push(tokio::spawn(async move {
                repo.try_join_room(&uid, &format!("player-{}", i)).await
            }));
        }

        for handle in handles {
            let result = handle.await.unwrap().unwrap();
            assert!(matches!(result, JoinRoomResult::Success(_)));
        }

        let stored = repo.get_room(&room.uid).await.unwrap().unwrap();
        assert_eq!(stored.participant_count(), joins + 1);
        assert_eq!(stored.participants[0], "owner");
    }
}
