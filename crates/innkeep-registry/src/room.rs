//! A single room record and its serializable snapshot.

use serde::{Deserialize, Serialize};

use crate::{Occupancy, RegistryError, RoomKind, RoomNumber};

/// A numbered room with a kind and an occupancy flag.
///
/// Rooms are created through [`Room::new`] (always available) and only
/// change state through [`reserve`](Room::reserve) and
/// [`release`](Room::release).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    number: RoomNumber,
    kind: RoomKind,
    occupancy: Occupancy,
}

impl Room {
    /// Creates an available room.
    pub fn new(number: RoomNumber, kind: RoomKind) -> Self {
        Self {
            number,
            kind,
            occupancy: Occupancy::Available,
        }
    }

    pub fn number(&self) -> RoomNumber {
        self.number
    }

    pub fn kind(&self) -> RoomKind {
        self.kind
    }

    pub fn occupancy(&self) -> Occupancy {
        self.occupancy
    }

    pub fn is_occupied(&self) -> bool {
        self.occupancy.is_occupied()
    }

    /// Marks the room occupied.
    ///
    /// # Errors
    /// Returns [`RegistryError::AlreadyOccupied`] if it already is. The room
    /// is left untouched in that case.
    pub fn reserve(&mut self) -> Result<(), RegistryError> {
        self.occupancy = self
            .occupancy
            .reserve()
            .ok_or(RegistryError::AlreadyOccupied(self.number))?;
        Ok(())
    }

    /// Marks the room available, whatever it was before.
    pub fn release(&mut self) {
        self.occupancy = self.occupancy.release();
    }

    /// One-line summary, e.g. `Room 101 (Simple) - Available`.
    pub fn status_line(&self) -> String {
        format!("Room {} ({}) - {}", self.number, self.kind, self.occupancy)
    }

    /// A detached, serializable copy of this room.
    pub fn info(&self) -> RoomInfo {
        RoomInfo {
            number: self.number,
            kind: self.kind,
            occupancy: self.occupancy,
        }
    }
}

/// A snapshot of one room, detached from the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomInfo {
    pub number: RoomNumber,
    pub kind: RoomKind,
    pub occupancy: Occupancy,
}
