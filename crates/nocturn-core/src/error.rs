//! Error types for Nocturn core.

use thiserror::Error;

/// Core error type for protocol encoding operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid button index: {0} (must be 0-15)")]
    InvalidButton(u8),

    #[error("Invalid button LED value: {0} (must be 0 or 1)")]
    InvalidLedValue(u8),

    #[error("Invalid ring index: {0} (must be 0-7)")]
    InvalidRing(u8),

    #[error("Invalid ring value: {0} (must be 0-127)")]
    InvalidRingValue(u8),
}

/// Result type alias for Nocturn core operations.
pub type Result<T> = std::result::Result<T, Error>;
