//! Nocturn HID - hardware integration for the control surface.
//!
//! This crate owns the USB session with the Nocturn (discovery, kernel
//! driver detach, endpoint I/O), the startup handshake and LED sweep, and
//! the polling loop that turns raw interrupt reports into control events.
//!
//! **Note**: the Nocturn speaks a vendor-specific protocol over raw
//! interrupt endpoints rather than standard HID reports, so the session is
//! built on `rusb` directly.

pub mod device;
pub mod error;
pub mod listen;

pub use device::NocturnDevice;
pub use error::{HidError, HidResult};
pub use listen::{ReportSource, listen};
