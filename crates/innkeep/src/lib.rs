//! # Innkeep
//!
//! Console front end for the hotel room registry.
//!
//! The operator drives a numbered menu; each selection becomes a
//! [`Command`] that [`handle_command`] applies to a
//! [`RoomRegistry`](innkeep_registry::RoomRegistry). Errors from the
//! registry are printed and the session carries on.
//!
//! ```text
//! stdin → Console (parse) → Command → handle_command → RoomRegistry
//!                                            │
//! stdout ←──────────── response lines ←──────┘
//! ```

mod console;
mod error;
mod handler;
mod menu;

pub use console::Console;
pub use error::InnkeepError;
pub use handler::handle_command;
pub use menu::{Command, MenuChoice, MENU};

/// Everything needed to embed the console or drive the registry directly.
pub mod prelude {
    pub use crate::{handle_command, Command, Console, InnkeepError, MenuChoice};
    pub use innkeep_registry::{
        Occupancy, RegistryConfig, RegistryError, Room, RoomInfo, RoomKind,
        RoomNumber, RoomRegistry,
    };
}
