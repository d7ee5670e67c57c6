//! Observers notified of transitions and ignored events.

use crate::core::{Event, State, StateTransition};

/// Receives notifications from a [`StateMachine`](crate::machine::StateMachine).
///
/// Observers run synchronously inside `dispatch`, after the state switch.
/// Every machine also reports the same notifications through `tracing`;
/// observers exist for callers that need them as values.
pub trait TransitionObserver<S: State, E: Event>: Send + Sync {
    /// Called after the machine has moved to `transition.to`.
    fn on_transition(&self, transition: &StateTransition<S, E>);

    /// Called when `event` was dispatched in `state`, which has no handler
    /// for it.
    fn on_invalid_event(&self, _state: &S, _event: &E) {}
}

impl<S, E, F> TransitionObserver<S, E> for F
where
    S: State,
    E: Event,
    F: Fn(&StateTransition<S, E>) + Send + Sync,
{
    fn on_transition(&self, transition: &StateTransition<S, E>) {
        self(transition)
    }
}
