//! Request handling: applies a [`Command`] to the registry and renders the
//! outcome as output lines.

use innkeep_registry::{Room, RoomRegistry};

use crate::Command;

/// Runs one command and returns the lines to print.
///
/// Registry errors are rendered as `Error: ...` lines. They never abort
/// the session.
pub fn handle_command(registry: &mut RoomRegistry, command: Command) -> Vec<String> {
    match command {
        Command::Register { number, kind } => {
            one(registry.register(Room::new(number, kind)).map(|room| {
                format!("Room {} ({}) registered.", room.number(), room.kind())
            }))
        }
        Command::List => {
            let mut lines = vec!["All rooms:".to_string()];
            lines.extend(registry.list_all());
            lines
        }
        Command::Reserve(number) => one(
            registry
                .reserve(number)
                .map(|room| format!("Room {} reserved.", room.number())),
        ),
        Command::Release(number) => one(
            registry
                .release(number)
                .map(|room| format!("Room {} released.", room.number())),
        ),
        Command::Status(number) => one(registry.status(number)),
        Command::CountOccupied => {
            vec![format!("Occupied rooms: {}", registry.count_occupied())]
        }
        Command::CountAvailable => {
            vec![format!("Available rooms: {}", registry.count_available())]
        }
    }
}

fn one<E: std::fmt::Display>(result: Result<String, E>) -> Vec<String> {
    match result {
        Ok(line) => vec![line],
        Err(e) => vec![format!("Error: {e}")],
    }
}
