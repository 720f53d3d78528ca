//! The three colors a traffic light can show.

use crate::state_enum;

state_enum! {
    /// Color currently shown by a traffic light.
    ///
    /// The set is closed: a light can only ever show one of these three
    /// colors, and every `match` over it is exhaustive.
    ///
    /// # Example
    ///
    /// ```rust
    /// use traflit::core::{LightState, State};
    ///
    /// assert_eq!(LightState::Red.next(), LightState::Green);
    /// assert_eq!(LightState::Yellow.name(), "Yellow");
    /// assert!(!LightState::Green.is_final());
    /// ```
    pub enum LightState {
        /// Stop.
        Red,
        /// Go.
        Green,
        /// Caution.
        Yellow,
    }
}

impl LightState {
    /// The color that follows this one in the cycle `Red -> Green -> Yellow -> Red`.
    pub const fn next(self) -> Self {
        match self {
            Self::Red => Self::Green,
            Self::Green => Self::Yellow,
            Self::Yellow => Self::Red,
        }
    }
}
