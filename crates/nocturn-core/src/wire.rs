//! Inbound report decoding.
//!
//! The Nocturn reports events as fixed-format interrupt packets. Byte 1 is a
//! descriptor identifying the physical control, byte 2 carries the value.
//! The format is proprietary and not self-describing, so the mapping below
//! is a fixed lookup reverse-engineered from the device, not a computed one.

use crate::event::{
    ButtonState, ControlEvent, ControlType, Direction, EventType, EventValue, TouchState,
};

/// Central encoder touch sensor
const DESC_CENTRAL_TOUCH: u8 = 82;
/// Central encoder rotation
const DESC_CENTRAL_TURN: u8 = 74;
/// Slider touch sensor
const DESC_SLIDER_TOUCH: u8 = 83;
/// Slider absolute position
const DESC_SLIDER_VALUE: u8 = 72;
/// Secondary encoder rotation, one descriptor per encoder
const DESC_ENCODER_BASE: u8 = 64;
const DESC_ENCODER_LAST: u8 = 71;
/// Button press/release, one descriptor per button
const DESC_BUTTON_BASE: u8 = 112;
const DESC_BUTTON_LAST: u8 = 127;

/// On the wire, 127 is the "asserted" sentinel: touched, pressed, or one
/// detent down. Any other value (practically 1) means the opposite.
const WIRE_ASSERTED: u8 = 127;

fn touch_state(value: u8) -> TouchState {
    if value == WIRE_ASSERTED { TouchState::Touched } else { TouchState::Free }
}

fn turn_direction(value: u8) -> Direction {
    if value == WIRE_ASSERTED { Direction::Down } else { Direction::Up }
}

fn button_state(value: u8) -> ButtonState {
    if value == WIRE_ASSERTED { ButtonState::Pressed } else { ButtonState::Released }
}

/// Decode one raw report into a control event.
///
/// Returns `None` for reports too short to carry a descriptor and for
/// descriptors outside the known ranges. An unrecognized report is the
/// steady-state "nothing happened" case, not a fault, so there is no error
/// path here.
#[must_use]
pub fn decode(report: &[u8]) -> Option<ControlEvent> {
    let [_, descriptor, value, ..] = *report else {
        return None;
    };

    let event = match descriptor {
        DESC_CENTRAL_TOUCH => ControlEvent {
            control_id: 0,
            control: ControlType::CentralEncoder,
            event: EventType::Touch,
            value: EventValue::Touch(touch_state(value)),
        },
        DESC_CENTRAL_TURN => ControlEvent {
            control_id: 0,
            control: ControlType::CentralEncoder,
            event: EventType::Value,
            value: EventValue::Turn(turn_direction(value)),
        },
        DESC_SLIDER_TOUCH => ControlEvent {
            control_id: 0,
            control: ControlType::Slider,
            event: EventType::Touch,
            value: EventValue::Touch(touch_state(value)),
        },
        DESC_SLIDER_VALUE => ControlEvent {
            control_id: 0,
            control: ControlType::Slider,
            event: EventType::Value,
            value: EventValue::Position(value),
        },
        DESC_ENCODER_BASE..=DESC_ENCODER_LAST => ControlEvent {
            control_id: descriptor - DESC_ENCODER_BASE,
            control: ControlType::Encoder,
            event: EventType::Value,
            value: EventValue::Turn(turn_direction(value)),
        },
        DESC_BUTTON_BASE..=DESC_BUTTON_LAST => ControlEvent {
            control_id: descriptor - DESC_BUTTON_BASE,
            control: ControlType::Button,
            event: EventType::Value,
            value: EventValue::Button(button_state(value)),
        },
        _ => return None,
    };

    Some(event)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn central_encoder_touch() {
        let event = decode(&[0, 82, 127]).unwrap();
        assert_eq!(event.control_id, 0);
        assert_eq!(event.control, ControlType::CentralEncoder);
        assert_eq!(event.event, EventType::Touch);
        assert_eq!(event.value, EventValue::Touch(TouchState::Touched));

        let event = decode(&[0, 82, 0]).unwrap();
        assert_eq!(event.value, EventValue::Touch(TouchState::Free));
    }

    #[test]
    fn central_encoder_turn() {
        let event = decode(&[0, 74, 127]).unwrap();
        assert_eq!(event.control, ControlType::CentralEncoder);
        assert_eq!(event.event, EventType::Value);
        assert_eq!(event.value, EventValue::Turn(Direction::Down));

        let event = decode(&[0, 74, 1]).unwrap();
        assert_eq!(event.value, EventValue::Turn(Direction::Up));
    }

    #[test]
    fn slider_touch_and_position() {
        let event = decode(&[0, 83, 127]).unwrap();
        assert_eq!(event.control, ControlType::Slider);
        assert_eq!(event.value, EventValue::Touch(TouchState::Touched));

        // Position passes the raw byte through, including 127
        let event = decode(&[0, 72, 99]).unwrap();
        assert_eq!(event.event, EventType::Value);
        assert_eq!(event.value, EventValue::Position(99));
        let event = decode(&[0, 72, 127]).unwrap();
        assert_eq!(event.value, EventValue::Position(127));
    }

    #[test]
    fn encoder_range_maps_to_ids() {
        let event = decode(&[0, 65, 127]).unwrap();
        assert_eq!(event.control_id, 1);
        assert_eq!(event.control, ControlType::Encoder);
        assert_eq!(event.value, EventValue::Turn(Direction::Down));

        assert_eq!(decode(&[0, 64, 1]).unwrap().control_id, 0);
        assert_eq!(decode(&[0, 71, 1]).unwrap().control_id, 7);
    }

    #[test]
    fn button_range_maps_to_ids() {
        let event = decode(&[0, 120, 1]).unwrap();
        assert_eq!(event.control_id, 8);
        assert_eq!(event.control, ControlType::Button);
        assert_eq!(event.value, EventValue::Button(ButtonState::Released));

        assert_eq!(decode(&[0, 112, 127]).unwrap().control_id, 0);
        assert_eq!(decode(&[0, 127, 127]).unwrap().control_id, 15);
    }

    #[test]
    fn unmapped_descriptors_yield_nothing() {
        for descriptor in [0, 63, 73, 75, 81, 84, 111, 128, 255] {
            assert_matches!(decode(&[0, descriptor, 127]), None);
        }
    }

    #[test]
    fn short_reports_yield_nothing() {
        assert_matches!(decode(&[]), None);
        assert_matches!(decode(&[0]), None);
        assert_matches!(decode(&[0, 82]), None);
    }

    #[test]
    fn trailing_bytes_are_ignored() {
        let event = decode(&[0, 82, 127, 9, 9, 9]).unwrap();
        assert_eq!(event.control, ControlType::CentralEncoder);
    }

    proptest! {
        #[test]
        fn encoder_descriptors_map_injectively(descriptor in 64u8..=71) {
            let event = decode(&[0, descriptor, 1]).unwrap();
            prop_assert_eq!(event.control, ControlType::Encoder);
            prop_assert_eq!(event.control_id, descriptor - 64);
            prop_assert!(event.control_id <= 7);
        }

        #[test]
        fn button_descriptors_map_injectively(descriptor in 112u8..=127) {
            let event = decode(&[0, descriptor, 1]).unwrap();
            prop_assert_eq!(event.control, ControlType::Button);
            prop_assert_eq!(event.control_id, descriptor - 112);
            prop_assert!(event.control_id <= 15);
        }

        #[test]
        fn unknown_descriptors_never_decode(descriptor in proptest::num::u8::ANY, value in proptest::num::u8::ANY) {
            prop_assume!(!matches!(descriptor, 82 | 74 | 83 | 72 | 64..=71 | 112..=127));
            prop_assert!(decode(&[0, descriptor, value]).is_none());
        }

        #[test]
        fn decode_is_pure(descriptor in proptest::num::u8::ANY, value in proptest::num::u8::ANY) {
            let report = [0, descriptor, value];
            prop_assert_eq!(decode(&report), decode(&report));
        }
    }
}
