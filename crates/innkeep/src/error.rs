//! Unified error type for Innkeep.

use innkeep_registry::RegistryError;

/// Top-level error that wraps every failure the console can hit.
///
/// Registry errors are normally rendered as messages by
/// [`handle_command`](crate::handle_command). This enum exists so `?`
/// works across the whole front end. Only I/O errors actually end the
/// session.
#[derive(Debug, thiserror::Error)]
pub enum InnkeepError {
    /// A registry-level error (not found, occupied, duplicate).
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Reading the operator's input or writing output failed.
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use innkeep_registry::RoomNumber;

    #[test]
    fn test_from_registry_error() {
        let err = RegistryError::NotFound(RoomNumber(1));
        let innkeep_err: InnkeepError = err.into();
        assert!(matches!(innkeep_err, InnkeepError::Registry(_)));
        assert_eq!(innkeep_err.to_string(), "room 1 does not exist");
    }

    #[test]
    fn test_from_io_error() {
        let err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "gone");
        let innkeep_err: InnkeepError = err.into();
        assert!(matches!(innkeep_err, InnkeepError::Io(_)));
        assert!(innkeep_err.to_string().contains("gone"));
    }
}
