//! Core state machine types.
//!
//! This module contains the vocabulary shared by descriptions and machines:
//! - State and event keys via the `State` and `Event` traits
//! - Immutable history of the transitions a machine has taken

mod history;
mod state;

pub use history::{StateHistory, StateTransition};
pub use state::{Event, State};
