//! Runtime errors raised while dispatching events.

use thiserror::Error;

/// Error returned by a handler action.
///
/// When a transition action fails the machine stays in its current state.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ActionError {
    #[error("{0}")]
    Failed(String),
}

impl ActionError {
    pub fn new(message: impl Into<String>) -> Self {
        Self::Failed(message.into())
    }
}

/// Errors that can occur when dispatching an event.
///
/// An event that the current state does not handle is not an error; see
/// [`StateMachine::dispatch`](crate::machine::StateMachine::dispatch).
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("Event '{event}' is not handled by any state of this machine")]
    UnknownEvent { event: String },

    #[error("Handler for '{event}' in state '{state}' failed: {source}")]
    ActionFailed {
        state: String,
        event: String,
        #[source]
        source: ActionError,
    },
}
