//! Transition errors.

use crate::core::{LightState, Signal};
use thiserror::Error;

/// Errors that can occur when applying a signal to a traffic light.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TransitionError {
    /// The signal's source color is not the light's current color.
    /// The light is left unchanged.
    #[error("cannot {signal} while light is {current}")]
    Illegal { signal: Signal, current: LightState },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn illegal_message_names_signal_and_state() {
        let err = TransitionError::Illegal {
            signal: Signal::TurnYellow,
            current: LightState::Red,
        };

        assert_eq!(err.to_string(), "cannot turn yellow while light is Red");
    }
}
