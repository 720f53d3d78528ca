//! Core state machine types.
//!
//! This module contains the pure core of the traffic light:
//! - State definitions via the `State` trait
//! - The closed `LightState` color enumeration
//! - Signals and the static transition table
//!
//! Nothing in this module mutates anything; mutation lives in
//! [`crate::machine`].

mod light;
mod state;
mod transition;

pub use light::LightState;
pub use state::State;
pub use transition::{Signal, Transition, TRANSITIONS};
