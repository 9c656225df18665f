//! Nocturn Core - wire protocol decoding and LED command encoding.
//!
//! This crate contains the pure protocol layer shared between the hardware
//! crate and any other consumer: typed control events, the inbound report
//! decoder, and the outbound LED/ring command encoders. No I/O happens here.

pub mod command;
pub mod error;
pub mod event;
pub mod wire;

pub use command::{RingMode, button_led, ring_mode, ring_value};
pub use error::{Error, Result};
pub use event::{ButtonState, ControlEvent, ControlType, Direction, EventType, EventValue, TouchState};
pub use wire::decode;
