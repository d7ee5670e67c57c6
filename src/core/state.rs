//! Core State and Event traits for state machine descriptions.
//!
//! States and events are typed keys. A description maps each state to its
//! table of event handlers, so both must be hashable and comparable.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// Trait for state machine states.
///
/// A state is a key into the states map of a description. States are
/// usually plain enums (see [`state_enum!`](crate::state_enum)), but
/// `String` is supported for machines whose state names are only known
/// at runtime.
///
/// # Required Traits
///
/// - `Clone`: the current state is copied into history records
/// - `Eq` + `Hash`: states key the states map
/// - `Debug`: states are printed in diagnostics
/// - `Serialize` + `Deserialize`: history records are serializable
///
/// # Example
///
/// ```rust
/// use statesmith::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum DoorState {
///     Open,
///     Closed,
///     Locked,
/// }
///
/// impl State for DoorState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Open => "open",
///             Self::Closed => "closed",
///             Self::Locked => "locked",
///         }
///     }
/// }
///
/// assert_eq!(DoorState::Locked.name(), "locked");
/// ```
pub trait State:
    Clone + Eq + Hash + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this is a final (terminal) state.
    ///
    /// Purely informational: the machine dispatches events in a final state
    /// like in any other state.
    fn is_final(&self) -> bool {
        false
    }
}

/// Trait for events a machine responds to.
///
/// Events key the handler table of each state. The set of events a machine
/// exposes is the union of the events of all its states.
pub trait Event:
    Clone + Eq + Hash + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the event's name for display/logging.
    fn name(&self) -> &str;
}

impl State for String {
    fn name(&self) -> &str {
        self
    }
}

impl Event for String {
    fn name(&self) -> &str {
        self
    }
}
