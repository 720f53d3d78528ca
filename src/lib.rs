//! Traflit: a minimal traffic light state machine
//!
//! A traffic light shows one of three colors and may only move along the
//! cycle `Red -> Green -> Yellow -> Red`. Any other move is rejected and
//! leaves the light as it was.
//!
//! # Core Concepts
//!
//! - **State**: Type-safe state representation via the `State` trait
//! - **LightState**: The closed set of colors a light can show
//! - **Signal**: A request to take one named edge of the cycle
//! - **TrafficLight**: The caller-owned value the signals act on
//!
//! Illegal transitions are never errors in the panicking sense: the boolean
//! operations return `false`, and [`TrafficLight::apply`] returns a
//! [`TransitionError`].
//!
//! # Example
//!
//! ```rust
//! use traflit::{initialize, is_valid, turn_green, turn_red, turn_yellow, LightState};
//!
//! let mut light = initialize();
//! assert_eq!(light.state, LightState::Red);
//!
//! assert!(turn_green(&mut light));
//! assert!(!turn_green(&mut light));
//! assert_eq!(light.state, LightState::Green);
//!
//! assert!(turn_yellow(&mut light));
//! assert!(turn_red(&mut light));
//! assert_eq!(light.state, LightState::Red);
//! assert!(is_valid(&light));
//! ```

mod macros;

pub mod core;
pub mod error;
pub mod machine;

// Re-export commonly used types
pub use crate::core::{LightState, Signal, State, Transition};
pub use error::TransitionError;
pub use machine::{initialize, is_valid, turn_green, turn_red, turn_yellow, TrafficLight};
