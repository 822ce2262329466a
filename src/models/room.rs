//! Room model.
//!
//! Rooms are the physical side of a section. Capacity is derived from the
//! room type, and a section's effective size cap is the smaller of its
//! course cap and its room cap.

use serde::{Deserialize, Serialize};

/// Physical room classification with derived capacities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RoomType {
    /// Ordinary classroom.
    Standard,
    /// Science lab.
    Lab,
    /// Art room or studio.
    ArtRoom,
    /// Gymnasium.
    Gym,
    /// Special-education classroom.
    SpedRoom,
    Cafeteria,
    Auditorium,
}

impl RoomType {
    /// Minimum viable section size for this room type.
    pub fn min_capacity(self) -> usize {
        match self {
            RoomType::Standard => 20,
            RoomType::Lab => 16,
            RoomType::ArtRoom => 16,
            RoomType::Gym => 30,
            RoomType::SpedRoom => 5,
            RoomType::Cafeteria => 100,
            RoomType::Auditorium => 50,
        }
    }

    /// Maximum seats for this room type.
    pub fn max_capacity(self) -> usize {
        match self {
            RoomType::Standard => 30,
            RoomType::Lab => 24,
            RoomType::ArtRoom => 24,
            RoomType::Gym => 60,
            RoomType::SpedRoom => 15,
            RoomType::Cafeteria => 360,
            RoomType::Auditorium => 120,
        }
    }

    /// Default room number used when the engine creates a section and the
    /// caller supplied no room inventory for this type.
    pub fn default_room_number(self) -> &'static str {
        match self {
            RoomType::Standard => "100",
            RoomType::Lab => "200",
            RoomType::ArtRoom => "300",
            RoomType::Gym => "GYM",
            RoomType::SpedRoom => "150",
            RoomType::Cafeteria => "CAF",
            RoomType::Auditorium => "AUD",
        }
    }
}

/// A physical room.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    /// Room number (opaque string, e.g. "204" or "GYM").
    pub number: String,
    /// Room classification.
    pub room_type: RoomType,
}

impl Room {
    /// Creates a room.
    pub fn new(number: impl Into<String>, room_type: RoomType) -> Self {
        Self {
            number: number.into(),
            room_type,
        }
    }

    /// Maximum seats, derived from the room type.
    pub fn max_capacity(&self) -> usize {
        self.room_type.max_capacity()
    }
}

/// Picks a room of the given type from the inventory, falling back to the
/// type's default room when the inventory has none.
pub fn room_of_type(rooms: &[Room], room_type: RoomType) -> Room {
    rooms
        .iter()
        .find(|r| r.room_type == room_type)
        .cloned()
        .unwrap_or_else(|| Room::new(room_type.default_room_number(), room_type))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_table() {
        assert_eq!(RoomType::Standard.max_capacity(), 30);
        assert_eq!(RoomType::SpedRoom.max_capacity(), 15);
        assert_eq!(RoomType::Cafeteria.max_capacity(), 360);
        for rt in [
            RoomType::Standard,
            RoomType::Lab,
            RoomType::ArtRoom,
            RoomType::Gym,
            RoomType::SpedRoom,
            RoomType::Cafeteria,
            RoomType::Auditorium,
        ] {
            assert!(rt.min_capacity() <= rt.max_capacity());
        }
    }

    #[test]
    fn test_room_of_type_prefers_inventory() {
        let rooms = vec![
            Room::new("101", RoomType::Standard),
            Room::new("210", RoomType::Lab),
        ];
        assert_eq!(room_of_type(&rooms, RoomType::Lab).number, "210");
    }

    #[test]
    fn test_room_of_type_falls_back() {
        let room = room_of_type(&[], RoomType::Gym);
        assert_eq!(room.number, "GYM");
        assert_eq!(room.room_type, RoomType::Gym);
    }
}
