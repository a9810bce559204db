//! Room registry: registers, looks up, reserves and releases rooms.

use crate::{RegistryConfig, RegistryError, Room, RoomInfo, RoomNumber};

/// All rooms known to the hotel, in registration order.
///
/// Lookups are linear scans that return the first room with a matching
/// number. The registry is owned by a single caller and mutated through
/// `&mut self`, so it needs no locking.
#[derive(Debug, Clone, Default)]
pub struct RoomRegistry {
    /// Rooms in insertion order. Listing preserves this order.
    rooms: Vec<Room>,

    config: RegistryConfig,
}

impl RoomRegistry {
    /// Creates an empty registry with the default config.
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    /// Creates an empty registry with the given config.
    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            rooms: Vec::with_capacity(config.initial_capacity),
            config,
        }
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Adds a room and returns the stored record.
    ///
    /// # Errors
    /// Returns [`RegistryError::DuplicateNumber`] if the number is taken,
    /// unless `allow_duplicate_numbers` is set.
    pub fn register(&mut self, room: Room) -> Result<&Room, RegistryError> {
        let number = room.number();
        if !self.config.allow_duplicate_numbers
            && self.position(number).is_some()
        {
            tracing::warn!(%number, "duplicate room number rejected");
            return Err(RegistryError::DuplicateNumber(number));
        }

        tracing::info!(%number, kind = %room.kind(), "room registered");
        let index = self.rooms.len();
        self.rooms.push(room);
        Ok(&self.rooms[index])
    }

    /// Returns the first room with this number.
    pub fn find_by_number(
        &self,
        number: RoomNumber,
    ) -> Result<&Room, RegistryError> {
        let index = self.lookup(number)?;
        Ok(&self.rooms[index])
    }

    /// Marks a room occupied.
    ///
    /// # Errors
    /// - [`RegistryError::NotFound`] if no room has this number.
    /// - [`RegistryError::AlreadyOccupied`] if the room is taken. State is
    ///   left unchanged.
    pub fn reserve(
        &mut self,
        number: RoomNumber,
    ) -> Result<&Room, RegistryError> {
        let index = self.lookup(number)?;
        let room = &mut self.rooms[index];
        if let Err(e) = room.reserve() {
            tracing::warn!(%number, "reservation rejected, room occupied");
            return Err(e);
        }
        tracing::info!(%number, "room reserved");
        Ok(&*room)
    }

    /// Marks a room available. Releasing a free room succeeds silently.
    pub fn release(
        &mut self,
        number: RoomNumber,
    ) -> Result<&Room, RegistryError> {
        let index = self.lookup(number)?;
        let room = &mut self.rooms[index];
        room.release();
        tracing::info!(%number, "room released");
        Ok(&*room)
    }

    /// Status line for one room, e.g. `Room 101 (Simple) - Available`.
    pub fn status(&self, number: RoomNumber) -> Result<String, RegistryError> {
        self.find_by_number(number).map(Room::status_line)
    }

    /// One status line per room, in registration order.
    pub fn list_all(&self) -> Vec<String> {
        self.rooms.iter().map(Room::status_line).collect()
    }

    pub fn count_available(&self) -> usize {
        self.rooms
            .iter()
            .filter(|r| r.occupancy().is_available())
            .count()
    }

    pub fn count_occupied(&self) -> usize {
        self.rooms
            .iter()
            .filter(|r| r.occupancy().is_occupied())
            .count()
    }

    /// Total number of registered rooms.
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Detached copies of every room, in registration order.
    pub fn snapshot(&self) -> Vec<RoomInfo> {
        self.rooms.iter().map(Room::info).collect()
    }

    fn position(&self, number: RoomNumber) -> Option<usize> {
        self.rooms.iter().position(|r| r.number() == number)
    }

    fn lookup(&self, number: RoomNumber) -> Result<usize, RegistryError> {
        self.position(number).ok_or_else(|| {
            tracing::debug!(%number, "room lookup missed");
            RegistryError::NotFound(number)
        })
    }
}
