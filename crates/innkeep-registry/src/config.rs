//! Registry configuration and the occupancy state machine.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// RegistryConfig
// ---------------------------------------------------------------------------

/// Configuration for a [`RoomRegistry`](crate::RoomRegistry).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Accept a registration whose number is already taken.
    ///
    /// When `true` the second room is appended anyway and lookups keep
    /// finding the first one. Default: `false` (duplicates are rejected).
    pub allow_duplicate_numbers: bool,

    /// Number of room slots to reserve up front.
    pub initial_capacity: usize,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            allow_duplicate_numbers: false,
            initial_capacity: 16,
        }
    }
}

// ---------------------------------------------------------------------------
// Occupancy
// ---------------------------------------------------------------------------

/// Whether a room is free or taken.
///
/// ```text
///               reserve (guarded)
///   Available ─────────────────────→ Occupied
///       ↑                               │
///       └──────── release ──────────────┘
/// ```
///
/// Reserving an occupied room is rejected. Releasing an available room is
/// a no-op.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
pub enum Occupancy {
    #[default]
    Available,
    Occupied,
}

impl Occupancy {
    /// Returns `true` if the room can be reserved.
    pub fn is_available(self) -> bool {
        matches!(self, Self::Available)
    }

    /// Returns `true` if the room is taken.
    pub fn is_occupied(self) -> bool {
        matches!(self, Self::Occupied)
    }

    /// The state after a reservation, or `None` if the room is taken.
    pub fn reserve(self) -> Option<Self> {
        match self {
            Self::Available => Some(Self::Occupied),
            Self::Occupied => None,
        }
    }

    /// The state after a release. Always `Available`.
    pub fn release(self) -> Self {
        Self::Available
    }
}

impl std::fmt::Display for Occupancy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Available => write!(f, "Available"),
            Self::Occupied => write!(f, "Occupied"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_occupancy_default_is_available() {
        assert_eq!(Occupancy::default(), Occupancy::Available);
    }

    #[test]
    fn test_occupancy_reserve_is_guarded() {
        assert_eq!(Occupancy::Available.reserve(), Some(Occupancy::Occupied));
        assert_eq!(Occupancy::Occupied.reserve(), None);
    }

    #[test]
    fn test_occupancy_release_is_unguarded() {
        assert_eq!(Occupancy::Occupied.release(), Occupancy::Available);
        assert_eq!(Occupancy::Available.release(), Occupancy::Available);
    }

    #[test]
    fn test_occupancy_predicates() {
        assert!(Occupancy::Available.is_available());
        assert!(!Occupancy::Available.is_occupied());
        assert!(Occupancy::Occupied.is_occupied());
        assert!(!Occupancy::Occupied.is_available());
    }

    #[test]
    fn test_occupancy_display() {
        assert_eq!(Occupancy::Available.to_string(), "Available");
        assert_eq!(Occupancy::Occupied.to_string(), "Occupied");
    }

    #[test]
    fn test_registry_config_default() {
        let config = RegistryConfig::default();
        assert!(!config.allow_duplicate_numbers);
        assert_eq!(config.initial_capacity, 16);
    }
}
