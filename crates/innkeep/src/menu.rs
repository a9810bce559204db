//! Menu options and the requests they turn into.

use innkeep_registry::{RoomKind, RoomNumber};

/// The main menu, shown before every selection.
pub const MENU: &str = "\
Options:
1. Register room
2. List all rooms
3. Reserve room
4. Release room
5. Show room status
6. Count occupied rooms
7. Count available rooms
8. Exit";

// ---------------------------------------------------------------------------
// MenuChoice
// ---------------------------------------------------------------------------

/// One of the eight numbered menu options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Register,
    List,
    Reserve,
    Release,
    Status,
    CountOccupied,
    CountAvailable,
    Exit,
}

impl MenuChoice {
    /// Maps a selection (1-8) to an option. Anything else is `None`.
    pub fn from_selection(selection: u32) -> Option<Self> {
        match selection {
            1 => Some(Self::Register),
            2 => Some(Self::List),
            3 => Some(Self::Reserve),
            4 => Some(Self::Release),
            5 => Some(Self::Status),
            6 => Some(Self::CountOccupied),
            7 => Some(Self::CountAvailable),
            8 => Some(Self::Exit),
            _ => None,
        }
    }

    /// The prompt for the room number this option needs, if any.
    pub(crate) fn number_prompt(self) -> Option<&'static str> {
        match self {
            Self::Register => Some("Enter room number: "),
            Self::Reserve => Some("Enter room number to reserve: "),
            Self::Release => Some("Enter room number to release: "),
            Self::Status => Some("Enter room number to look up: "),
            Self::List
            | Self::CountOccupied
            | Self::CountAvailable
            | Self::Exit => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Command
// ---------------------------------------------------------------------------

/// A fully-parsed request against the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Register { number: RoomNumber, kind: RoomKind },
    List,
    Reserve(RoomNumber),
    Release(RoomNumber),
    Status(RoomNumber),
    CountOccupied,
    CountAvailable,
}
