//! Property-based tests for the traffic light.
//!
//! These tests use proptest to drive lights through arbitrary signal
//! sequences and check that the cycle invariants always hold.

use proptest::prelude::*;
use traflit::{LightState, Signal, TrafficLight, TransitionError};

prop_compose! {
    fn arbitrary_state()(variant in 0..3u8) -> LightState {
        match variant {
            0 => LightState::Red,
            1 => LightState::Green,
            _ => LightState::Yellow,
        }
    }
}

prop_compose! {
    fn arbitrary_signal()(variant in 0..3u8) -> Signal {
        match variant {
            0 => Signal::TurnGreen,
            1 => Signal::TurnYellow,
            _ => Signal::TurnRed,
        }
    }
}

fn send(light: &mut TrafficLight, signal: Signal) -> bool {
    match signal {
        Signal::TurnGreen => traflit::turn_green(light),
        Signal::TurnYellow => traflit::turn_yellow(light),
        Signal::TurnRed => traflit::turn_red(light),
    }
}

fn required_source(signal: Signal) -> LightState {
    match signal {
        Signal::TurnGreen => LightState::Red,
        Signal::TurnYellow => LightState::Green,
        Signal::TurnRed => LightState::Yellow,
    }
}

proptest! {
    #[test]
    fn signal_sequences_keep_light_valid(
        signals in prop::collection::vec(arbitrary_signal(), 0..64)
    ) {
        let mut light = traflit::initialize();

        for signal in signals {
            send(&mut light, signal);
            prop_assert!(LightState::VARIANTS.contains(&light.state));
            prop_assert!(traflit::is_valid(&light));
        }
    }

    #[test]
    fn signal_succeeds_iff_light_is_at_source(
        state in arbitrary_state(),
        signal in arbitrary_signal()
    ) {
        let mut light = TrafficLight { state };

        let accepted = send(&mut light, signal);

        if state == required_source(signal) {
            prop_assert!(accepted);
            prop_assert_eq!(light.state, state.next());
        } else {
            prop_assert!(!accepted);
            prop_assert_eq!(light.state, state);
        }
    }

    #[test]
    fn failed_transitions_are_idempotent(
        state in arbitrary_state(),
        signal in arbitrary_signal(),
        repeats in 1..20usize
    ) {
        prop_assume!(state != required_source(signal));
        let mut light = TrafficLight { state };

        for _ in 0..repeats {
            prop_assert!(!send(&mut light, signal));
            prop_assert_eq!(light.state, state);
        }
    }

    #[test]
    fn cycle_repeats_indefinitely(cycles in 1..50usize) {
        let mut light = traflit::initialize();

        for _ in 0..cycles {
            prop_assert!(traflit::turn_green(&mut light));
            prop_assert!(traflit::turn_yellow(&mut light));
            prop_assert!(traflit::turn_red(&mut light));
            prop_assert_eq!(light.state, LightState::Red);
        }
    }

    #[test]
    fn apply_agrees_with_boolean_operations(
        state in arbitrary_state(),
        signal in arbitrary_signal()
    ) {
        let mut via_bool = TrafficLight { state };
        let mut via_result = TrafficLight { state };

        let accepted = send(&mut via_bool, signal);
        let result = via_result.apply(signal);

        prop_assert_eq!(accepted, result.is_ok());
        prop_assert_eq!(via_bool, via_result);
        if let Err(err) = result {
            prop_assert_eq!(err, TransitionError::Illegal { signal, current: state });
        }
    }

    #[test]
    fn initialize_always_resets_to_red(
        signals in prop::collection::vec(arbitrary_signal(), 0..16)
    ) {
        let mut light = traflit::initialize();
        for signal in signals {
            send(&mut light, signal);
        }

        light.initialize();

        prop_assert_eq!(light.state, LightState::Red);
    }

    #[test]
    fn light_roundtrip_serialization(state in arbitrary_state()) {
        let light = TrafficLight { state };
        let json = serde_json::to_string(&light).unwrap();
        let deserialized: TrafficLight = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(light, deserialized);
    }
}
