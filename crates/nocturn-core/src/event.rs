//! Typed control events produced by decoding inbound reports.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Physical control class on the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlType {
    /// One of the 16 backlit buttons
    Button,
    /// One of the 8 secondary rotary encoders
    Encoder,
    /// The touch-sensitive speed-dial encoder in the center
    CentralEncoder,
    /// The touch slider strip
    Slider,
}

/// Kind of event a control reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    /// Finger placed on or lifted off a touch-sensitive control
    Touch,
    /// A value change: rotation, press/release, or slider position
    Value,
}

/// Touch sensor state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TouchState {
    Touched,
    Free,
}

/// Rotation direction of an encoder.
///
/// The device reports direction only, not delta magnitude: 127 on the wire
/// means one detent down, anything else means one detent up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Down,
    Up,
}

/// Button press state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonState {
    Pressed,
    Released,
}

/// Payload of a control event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventValue {
    /// Touch sensor transition
    Touch(TouchState),
    /// One encoder detent in the given direction
    Turn(Direction),
    /// Button press/release edge
    Button(ButtonState),
    /// Absolute slider position (0-127)
    Position(u8),
}

impl fmt::Display for EventValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Touch(TouchState::Touched) => write!(f, "touched"),
            Self::Touch(TouchState::Free) => write!(f, "free"),
            Self::Turn(Direction::Down) => write!(f, "down"),
            Self::Turn(Direction::Up) => write!(f, "up"),
            Self::Button(ButtonState::Pressed) => write!(f, "pressed"),
            Self::Button(ButtonState::Released) => write!(f, "released"),
            Self::Position(value) => write!(f, "{value}"),
        }
    }
}

/// One decoded event from the control surface.
///
/// `control_id` indexes within the control class: 0-15 for buttons, 0-7 for
/// encoders, always 0 for the central encoder and the slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlEvent {
    /// Index of the control within its class
    pub control_id: u8,
    /// Which control class produced the event
    pub control: ControlType,
    /// Touch transition or value change
    pub event: EventType,
    /// Event payload
    pub value: EventValue,
}
