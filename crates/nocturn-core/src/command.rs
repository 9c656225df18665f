//! Outbound LED and ring command encoding.
//!
//! Every command the device understands is a 2-byte `(address, data)` pair.
//! Encoders here only build and validate the bytes; writing them to the
//! interrupt OUT endpoint is the hardware crate's job.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Base address for button LED commands
const BUTTON_LED_BASE: u8 = 0x70;
/// Base address for ring mode commands
const RING_MODE_BASE: u8 = 0x48;
/// Base address for ring value commands
const RING_VALUE_BASE: u8 = 0x40;

/// Highest button index
pub const BUTTON_MAX: u8 = 15;
/// Highest ring index
pub const RING_MAX: u8 = 7;
/// Highest ring value
pub const RING_VALUE_MAX: u8 = 127;

/// Display mode of an encoder's LED ring.
///
/// The mode byte is firmware-defined; the variants document the observed
/// behavior. The device latches the mode per ring until it is set again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum RingMode {
    /// Fill LEDs from the minimum position up to the value
    FillFromMin = 0,
    /// Fill LEDs from the maximum position down to the value
    FillFromMax = 1,
    /// Fill from the midpoint toward the value, one direction
    FromMidSingle = 2,
    /// Fill from the midpoint toward the value, both directions
    FromMidBoth = 3,
    /// Light only the LED at the value
    SingleValue = 4,
    /// Light every LED except the one at the value
    SingleValueInverted = 5,
}

/// Encode a button LED command.
///
/// `value` is 0 to turn the LED off, 1 to turn it on.
///
/// # Errors
/// Returns an error if `button` is above 15 or `value` is not 0 or 1.
pub fn button_led(button: u8, value: u8) -> Result<[u8; 2]> {
    if button > BUTTON_MAX {
        return Err(Error::InvalidButton(button));
    }
    if value > 1 {
        return Err(Error::InvalidLedValue(value));
    }
    Ok([BUTTON_LED_BASE + button, value])
}

/// Encode a ring display-mode command.
///
/// # Errors
/// Returns an error if `ring` is above 7.
pub fn ring_mode(ring: u8, mode: RingMode) -> Result<[u8; 2]> {
    if ring > RING_MAX {
        return Err(Error::InvalidRing(ring));
    }
    Ok([RING_MODE_BASE + ring, (mode as u8) << 4])
}

/// Encode a ring value command.
///
/// # Errors
/// Returns an error if `ring` is above 7 or `value` is above 127.
pub fn ring_value(ring: u8, value: u8) -> Result<[u8; 2]> {
    if ring > RING_MAX {
        return Err(Error::InvalidRing(ring));
    }
    if value > RING_VALUE_MAX {
        return Err(Error::InvalidRingValue(value));
    }
    Ok([RING_VALUE_BASE + ring, value])
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn button_led_bytes() {
        assert_eq!(button_led(0, 0).unwrap(), [0x70, 0x00]);
        assert_eq!(button_led(15, 1).unwrap(), [0x7F, 0x01]);
    }

    #[test]
    fn button_led_rejects_out_of_range() {
        assert_matches!(button_led(16, 1), Err(Error::InvalidButton(16)));
        assert_matches!(button_led(0, 2), Err(Error::InvalidLedValue(2)));
    }

    #[test]
    fn ring_mode_bytes() {
        assert_eq!(ring_mode(0, RingMode::FillFromMin).unwrap(), [0x48, 0x00]);
        assert_eq!(ring_mode(7, RingMode::SingleValueInverted).unwrap(), [0x4F, 0x50]);
        assert_eq!(ring_mode(3, RingMode::FromMidBoth).unwrap(), [0x4B, 0x30]);
    }

    #[test]
    fn ring_mode_rejects_out_of_range() {
        assert_matches!(ring_mode(8, RingMode::FillFromMin), Err(Error::InvalidRing(8)));
    }

    #[test]
    fn ring_value_bytes() {
        assert_eq!(ring_value(0, 0).unwrap(), [0x40, 0x00]);
        assert_eq!(ring_value(7, 127).unwrap(), [0x47, 0x7F]);
    }

    // The original firmware notes accepted ring 8 in the value path while the
    // mode path stopped at 7. Both commands address the same 8 rings, so the
    // value path uses the same bound.
    #[test]
    fn ring_value_rejects_ring_eight() {
        assert_matches!(ring_value(8, 0), Err(Error::InvalidRing(8)));
    }

    #[test]
    fn ring_value_rejects_out_of_range_value() {
        assert_matches!(ring_value(0, 128), Err(Error::InvalidRingValue(128)));
    }

    proptest! {
        #[test]
        fn encoding_is_pure(button in 0u8..=15, value in 0u8..=1) {
            prop_assert_eq!(button_led(button, value).unwrap(), button_led(button, value).unwrap());
        }

        #[test]
        fn button_addresses_are_unique(a in 0u8..=15, b in 0u8..=15) {
            prop_assume!(a != b);
            prop_assert_ne!(button_led(a, 1).unwrap()[0], button_led(b, 1).unwrap()[0]);
        }

        #[test]
        fn ring_commands_stay_in_address_range(ring in 0u8..=7, value in 0u8..=127) {
            let [address, _] = ring_value(ring, value).unwrap();
            prop_assert!((0x40..=0x47).contains(&address));
        }
    }
}
