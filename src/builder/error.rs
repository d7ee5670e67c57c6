//! Build errors for descriptions and machines.

use thiserror::Error;

/// Errors that can occur when building descriptions and state machines.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Initial data not specified. Call .data(value) before .build()")]
    MissingInitialData,

    #[error("Starting state not specified. Call .starting(state) before .build()")]
    MissingStartingState,

    #[error("No states defined. Add at least one state")]
    NoStates,

    #[error("State '{state}' is defined more than once")]
    DuplicateState { state: String },

    #[error("Starting state '{state}' is not defined")]
    UnknownStartingState { state: String },

    #[error("Event '{event}' in state '{state}' transitions to undefined state '{target}'")]
    UnknownTransitionTarget {
        state: String,
        event: String,
        target: String,
    },
}
