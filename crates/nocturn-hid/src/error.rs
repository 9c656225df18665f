//! HID error types.

use thiserror::Error;

/// HID error type.
#[derive(Debug, Error)]
pub enum HidError {
    #[error("Nocturn not found")]
    DeviceNotFound,

    #[error("Device busy: {0}")]
    DeviceBusy(String),

    #[error("No interrupt {0} endpoint on the control interface")]
    EndpointNotFound(&'static str),

    #[error("USB error: {0}")]
    Usb(#[from] rusb::Error),

    #[error("Protocol error: {0}")]
    Protocol(#[from] nocturn_core::Error),
}

/// Result type for HID operations.
pub type HidResult<T> = std::result::Result<T, HidError>;
