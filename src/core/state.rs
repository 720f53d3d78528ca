//! Core State trait for state machine states.
//!
//! State enums implement this trait, which provides pure methods for
//! inspecting state properties without side effects.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine states.
///
/// All methods are pure. States are small immutable values describing the
/// current position in a state machine.
///
/// # Required Traits
///
/// - `Copy`: States are plain values, copied in and out of machines
/// - `Eq`: States must be comparable for transition logic
/// - `Debug`: States must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: States can be embedded in caller formats
///
/// # Example
///
/// ```rust
/// use traflit::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
/// enum Lamp {
///     On,
///     Off,
/// }
///
/// impl State for Lamp {
///     fn name(&self) -> &'static str {
///         match self {
///             Self::On => "On",
///             Self::Off => "Off",
///         }
///     }
/// }
///
/// assert_eq!(Lamp::On.name(), "On");
/// assert!(!Lamp::Off.is_final());
/// ```
pub trait State:
    Copy + Eq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &'static str;

    /// Check if this is a final (terminal) state.
    ///
    /// Final states are points where no further transitions are expected.
    /// Cyclic machines have none.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }
}
