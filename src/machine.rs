//! The traffic light value and its transition operations.
//!
//! Every operation is synchronous and never panics. Illegal transitions
//! leave the light untouched and are reported either as `false` (the
//! boolean operations) or as a [`TransitionError`] (the [`TrafficLight::apply`]
//! surface the boolean operations are built on).

use crate::core::{LightState, Signal, State, Transition};
use crate::error::TransitionError;
use serde::{Deserialize, Serialize};

/// A single traffic light.
///
/// The light is a plain value owned by the caller. Its only field is the
/// color it currently shows, which is public and always one of the three
/// [`LightState`] variants.
///
/// # Example
///
/// ```rust
/// use traflit::{LightState, TrafficLight};
///
/// let mut light = TrafficLight::new();
/// assert_eq!(light.state, LightState::Red);
///
/// assert!(light.turn_green());
/// assert!(!light.turn_green());
/// assert!(light.turn_yellow());
/// assert!(light.turn_red());
/// assert_eq!(light.current_state(), LightState::Red);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct TrafficLight {
    /// Color currently shown.
    pub state: LightState,
}

impl TrafficLight {
    /// Create a light showing red.
    pub fn new() -> Self {
        Self {
            state: LightState::Red,
        }
    }

    /// Reset the light to red, discarding whatever it showed before.
    pub fn initialize(&mut self) {
        tracing::trace!(from = %self.state, "traffic light reset to Red");
        self.state = LightState::Red;
    }

    /// Get current state (pure)
    pub fn current_state(&self) -> LightState {
        self.state
    }

    /// The one signal that is legal from the current color.
    pub fn next_signal(&self) -> Signal {
        Transition::leaving(self.state).signal
    }

    /// Apply a signal, moving along its edge if the light is at the edge's
    /// source color.
    ///
    /// Returns the new color on success. On failure the light is unchanged
    /// and the error carries the rejected signal and the current color.
    ///
    /// # Example
    ///
    /// ```rust
    /// use traflit::{LightState, Signal, TrafficLight, TransitionError};
    ///
    /// let mut light = TrafficLight::new();
    ///
    /// assert_eq!(
    ///     light.apply(Signal::TurnYellow),
    ///     Err(TransitionError::Illegal {
    ///         signal: Signal::TurnYellow,
    ///         current: LightState::Red,
    ///     })
    /// );
    /// assert_eq!(light.apply(Signal::TurnGreen), Ok(LightState::Green));
    /// ```
    pub fn apply(&mut self, signal: Signal) -> Result<LightState, TransitionError> {
        let transition = Transition::for_signal(signal);

        if !transition.can_execute(&self.state) {
            tracing::debug!(
                signal = %signal,
                current = self.state.name(),
                "rejected illegal transition"
            );
            return Err(TransitionError::Illegal {
                signal,
                current: self.state,
            });
        }

        tracing::trace!(
            from = transition.from.name(),
            to = transition.to.name(),
            "traffic light transitioned"
        );
        self.state = transition.to;
        Ok(self.state)
    }

    /// Take the single edge leaving the current color and return the new color.
    pub fn step(&mut self) -> LightState {
        let transition = Transition::leaving(self.state);
        tracing::trace!(
            from = transition.from.name(),
            to = transition.to.name(),
            "traffic light stepped"
        );
        self.state = transition.to;
        self.state
    }

    /// `Red -> Green`. Returns `false` and leaves the light unchanged from
    /// any other color.
    pub fn turn_green(&mut self) -> bool {
        self.apply(Signal::TurnGreen).is_ok()
    }

    /// `Green -> Yellow`. Returns `false` and leaves the light unchanged from
    /// any other color.
    pub fn turn_yellow(&mut self) -> bool {
        self.apply(Signal::TurnYellow).is_ok()
    }

    /// `Yellow -> Red`. Returns `false` and leaves the light unchanged from
    /// any other color.
    pub fn turn_red(&mut self) -> bool {
        self.apply(Signal::TurnRed).is_ok()
    }

    /// Check that the light shows one of the known colors.
    ///
    /// The color set is closed, so this always holds for any light that
    /// exists; it is kept so callers can assert the invariant explicitly.
    pub fn is_valid(&self) -> bool {
        match self.state {
            LightState::Red | LightState::Green | LightState::Yellow => true,
        }
    }
}

impl Default for TrafficLight {
    fn default() -> Self {
        Self::new()
    }
}

/// Create a light showing red.
pub fn initialize() -> TrafficLight {
    TrafficLight::new()
}

/// Move `light` from red to green. See [`TrafficLight::turn_green`].
pub fn turn_green(light: &mut TrafficLight) -> bool {
    light.turn_green()
}

/// Move `light` from green to yellow. See [`TrafficLight::turn_yellow`].
pub fn turn_yellow(light: &mut TrafficLight) -> bool {
    light.turn_yellow()
}

/// Move `light` from yellow to red. See [`TrafficLight::turn_red`].
pub fn turn_red(light: &mut TrafficLight) -> bool {
    light.turn_red()
}

/// Check that `light` shows one of the known colors. See [`TrafficLight::is_valid`].
pub fn is_valid(light: &TrafficLight) -> bool {
    light.is_valid()
}
