//! In-memory hotel room registry for Innkeep.
//!
//! Tracks a set of numbered rooms, each with a kind and an
//! available/occupied flag, and enforces the reservation rules.
//!
//! # Key types
//!
//! - [`RoomRegistry`]: registers rooms, reserves and releases them, counts
//! - [`Room`]: one numbered room and its occupancy
//! - [`RoomKind`]: Simple, Double or Suite
//! - [`Occupancy`]: the two-state available/occupied flag
//! - [`RegistryConfig`]: duplicate-number policy and sizing
//! - [`RegistryError`]: NotFound, AlreadyOccupied, DuplicateNumber

mod config;
mod error;
mod registry;
mod room;
mod types;

pub use config::{Occupancy, RegistryConfig};
pub use error::RegistryError;
pub use registry::RoomRegistry;
pub use room::{Room, RoomInfo};
pub use types::{RoomKind, RoomNumber};
