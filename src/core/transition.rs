//! Signals and the static transition table.

use super::light::LightState;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Request to perform one of the named transitions.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Signal {
    /// `Red -> Green`
    TurnGreen,
    /// `Green -> Yellow`
    TurnYellow,
    /// `Yellow -> Red`
    TurnRed,
}

impl Signal {
    /// Every signal, in cycle order.
    pub const ALL: [Signal; 3] = [Signal::TurnGreen, Signal::TurnYellow, Signal::TurnRed];
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::TurnGreen => "turn green",
            Self::TurnYellow => "turn yellow",
            Self::TurnRed => "turn red",
        };
        f.pad(s)
    }
}

/// A legal edge of the traffic light cycle.
///
/// # Example
///
/// ```rust
/// use traflit::core::{LightState, Signal, Transition};
///
/// let edge = Transition::for_signal(Signal::TurnYellow);
/// assert_eq!(edge.from, LightState::Green);
/// assert_eq!(edge.to, LightState::Yellow);
/// assert!(edge.can_execute(&LightState::Green));
/// assert!(!edge.can_execute(&LightState::Red));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Transition {
    pub signal: Signal,
    pub from: LightState,
    pub to: LightState,
}

/// The only edges a traffic light may take.
pub static TRANSITIONS: [Transition; 3] = [
    Transition {
        signal: Signal::TurnGreen,
        from: LightState::Red,
        to: LightState::Green,
    },
    Transition {
        signal: Signal::TurnYellow,
        from: LightState::Green,
        to: LightState::Yellow,
    },
    Transition {
        signal: Signal::TurnRed,
        from: LightState::Yellow,
        to: LightState::Red,
    },
];

impl Transition {
    /// Look up the edge a signal drives.
    pub fn for_signal(signal: Signal) -> &'static Transition {
        match signal {
            Signal::TurnGreen => &TRANSITIONS[0],
            Signal::TurnYellow => &TRANSITIONS[1],
            Signal::TurnRed => &TRANSITIONS[2],
        }
    }

    /// Look up the single edge leaving `state`.
    pub fn leaving(state: LightState) -> &'static Transition {
        match state {
            LightState::Red => &TRANSITIONS[0],
            LightState::Green => &TRANSITIONS[1],
            LightState::Yellow => &TRANSITIONS[2],
        }
    }

    /// Check if this transition can execute from the current state (pure)
    pub fn can_execute(&self, current: &LightState) -> bool {
        *current == self.from
    }
}
