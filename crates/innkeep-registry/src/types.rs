//! Identity and classification types for rooms.

use serde::{Deserialize, Serialize};

use std::fmt;

// ---------------------------------------------------------------------------
// RoomNumber
// ---------------------------------------------------------------------------

/// The caller-assigned number of a room (e.g. `101`).
///
/// Room numbers are non-negative: the console rejects `-5` as invalid
/// input before a `RoomNumber` is ever built.
///
/// A newtype over `u32` so a room number can't be mixed up with a count
/// or a menu selection, even though all three are integers underneath.
///
/// `#[serde(transparent)]` serializes `RoomNumber(101)` as plain `101`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct RoomNumber(pub u32);

/// Prints the bare number, so `"room {}"` reads as `"room 101"`.
impl fmt::Display for RoomNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for RoomNumber {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

// ---------------------------------------------------------------------------
// RoomKind
// ---------------------------------------------------------------------------

/// The type of a room.
///
/// Kinds differ only in their label, so this is a closed enum rather than
/// a trait with one implementation per kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoomKind {
    Simple,
    Double,
    Suite,
}

impl RoomKind {
    /// Every kind, in menu order.
    pub const ALL: [Self; 3] = [Self::Simple, Self::Double, Self::Suite];

    /// Maps the operator's type code (1=Simple, 2=Double, 3=Suite).
    ///
    /// Returns `None` for any other code.
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            1 => Some(Self::Simple),
            2 => Some(Self::Double),
            3 => Some(Self::Suite),
            _ => None,
        }
    }

    /// The menu code for this kind. Inverse of [`RoomKind::from_code`].
    pub fn code(self) -> u32 {
        match self {
            Self::Simple => 1,
            Self::Double => 2,
            Self::Suite => 3,
        }
    }

    /// Human-readable name used in status lines.
    pub fn label(self) -> &'static str {
        match self {
            Self::Simple => "Simple",
            Self::Double => "Double",
            Self::Suite => "Suite",
        }
    }
}

impl fmt::Display for RoomKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_number_display_is_bare() {
        assert_eq!(RoomNumber(101).to_string(), "101");
    }

    #[test]
    fn test_room_kind_from_code() {
        assert_eq!(RoomKind::from_code(1), Some(RoomKind::Simple));
        assert_eq!(RoomKind::from_code(2), Some(RoomKind::Double));
        assert_eq!(RoomKind::from_code(3), Some(RoomKind::Suite));
        assert_eq!(RoomKind::from_code(0), None);
        assert_eq!(RoomKind::from_code(4), None);
    }

    #[test]
    fn test_room_kind_code_matches_from_code() {
        for kind in RoomKind::ALL {
            assert_eq!(RoomKind::from_code(kind.code()), Some(kind));
        }
    }

    #[test]
    fn test_room_kind_labels() {
        assert_eq!(RoomKind::Simple.to_string(), "Simple");
        assert_eq!(RoomKind::Double.to_string(), "Double");
        assert_eq!(RoomKind::Suite.to_string(), "Suite");
    }
}
