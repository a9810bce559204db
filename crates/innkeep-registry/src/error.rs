//! Error types for the registry.

use crate::RoomNumber;

/// Errors that can occur during registry operations.
///
/// None of these are fatal. The front end prints the message and carries on.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// No room with this number has been registered.
    #[error("room {0} does not exist")]
    NotFound(RoomNumber),

    /// The room is already reserved.
    #[error("room {0} is already occupied")]
    AlreadyOccupied(RoomNumber),

    /// A room with this number is already registered.
    #[error("room {0} is already registered")]
    DuplicateNumber(RoomNumber),
}
