use std::path::PathBuf;

use thiserror::Error;

use crate::catalog::RideOptionId;

/// Errors the booking flow reports back to the caller. All of them are
/// recoverable: the flow stays where it was and the rider can retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    #[error("both pickup and destination locations are required")]
    IncompleteLocationInput,
}

/// Errors raised while loading or saving a booking file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid booking file: {0}")]
    InvalidFormat(#[from] serde_json::Error),
    #[error("unsupported booking file version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },
    #[error("ride catalog must contain at least one option")]
    EmptyCatalog,
    #[error("ride option id {0} appears more than once")]
    DuplicateRideOption(RideOptionId),
}
