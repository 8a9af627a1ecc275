use serde::Serialize;
use uuid::Uuid;

/// In-memory record for a single room
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoomModel {
    pub uid: Uuid,                 // Random v4 UUID, fixed at creation
    pub participants: Vec<String>, // Display names in join order, duplicates allowed
}

impl RoomModel {
    /// Creates a new room with a fresh ID and the owner as its only participant
    pub fn new(owner_name: String) -> Self {
        Self {
            uid: Uuid::new_v4(),
            participants: vec![owner_name],
        }
    }

    /// Get the current number of participants
    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }

    /// Append a participant. No dedup, no capacity check.
    pub fn add_participant(&mut self, name: String) {
        self.participants.push(name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_room_has_owner_only() {
        let room = RoomModel::new("Alice".to_string());
        assert_eq!(room.participants, vec!["Alice".to_string()]);
        assert_eq!(room.participant_count(), 1);
        assert!(!room.uid.is_nil());
    }

    #[test]
    fn test_new_rooms_get_distinct_ids() {
        let a = RoomModel::new("Alice".to_string());
        let b = RoomModel::new("Alice".to_string());
        assert_ne!(a.uid, b.uid);
    }

    #[test]
    fn test_add_participant_keeps_order_and_duplicates() {
        let mut room = RoomModel::new("Alice".to_string());
        room.add_participant("Bob".to_string());
        room.add_participant("Alice".to_string());

        assert_eq!(room.participants, vec!["Alice", "Bob", "Alice"]);
        assert_eq!(room.participant_count(), 3);
    }

    #[test]
    fn test_serializes_as_uid_and_participants() {
        let room = RoomModel::new("Alice".to_string());
        let value = serde_json::to_value(&room).unwrap();

        assert_eq!(value["uid"], room.uid.to_string());
        assert_eq!(value["participants"], serde_json::json!(["Alice"]));
    }
}
