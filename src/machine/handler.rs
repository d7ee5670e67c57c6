//! Event handlers and the transition helper.

use crate::core::State;
use crate::machine::error::ActionError;
use std::fmt;
use std::sync::Arc;

/// Type alias for handler actions.
///
/// Actions receive the machine's data explicitly and the arguments the
/// event was dispatched with.
pub type Action<D, A, R> = Arc<dyn Fn(&mut D, &A) -> Result<R, ActionError> + Send + Sync>;

/// Handler registered for one event in one state.
///
/// A handler without a target is a self-loop: it runs its action and the
/// machine stays where it is. A handler built by [`transition_to`] or
/// [`transition_to_with`] carries a target, and the machine moves there
/// once the action has returned `Ok`.
pub struct Handler<S, D, A, R> {
    action: Action<D, A, R>,
    target: Option<S>,
}

impl<S: State, D, A, R> Handler<S, D, A, R> {
    /// Create a handler that runs `action` without changing state.
    pub fn new<F>(action: F) -> Self
    where
        F: Fn(&mut D, &A) -> Result<R, ActionError> + Send + Sync + 'static,
    {
        Self {
            action: Arc::new(action),
            target: None,
        }
    }

    /// State the machine moves to after this handler succeeds.
    pub fn target(&self) -> Option<&S> {
        self.target.as_ref()
    }

    pub fn is_transition(&self) -> bool {
        self.target.is_some()
    }

    /// Run the action. The state switch is applied by the machine.
    pub(crate) fn run(&self, data: &mut D, args: &A) -> Result<R, ActionError> {
        (self.action)(data, args)
    }
}

impl<S: Clone, D, A, R> Clone for Handler<S, D, A, R> {
    fn clone(&self) -> Self {
        Self {
            action: Arc::clone(&self.action),
            target: self.target.clone(),
        }
    }
}

impl<S: fmt::Debug, D, A, R> fmt::Debug for Handler<S, D, A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handler")
            .field("target", &self.target)
            .finish_non_exhaustive()
    }
}

/// Create a handler that only moves the machine to `target`.
///
/// The target is checked against the states map when the machine is
/// built, not here.
///
/// # Example
///
/// ```
/// use statesmith::machine::{transition_to, Handler};
///
/// let hold: Handler<String, u64, (), ()> = transition_to("held".to_string());
/// assert_eq!(hold.target().map(String::as_str), Some("held"));
/// ```
pub fn transition_to<S, D, A, R>(target: S) -> Handler<S, D, A, R>
where
    S: State,
    D: 'static,
    A: 'static,
    R: Default + 'static,
{
    Handler {
        action: Arc::new(|_: &mut D, _: &A| Ok(R::default())),
        target: Some(target),
    }
}

/// Create a handler that runs `action` and then moves the machine to
/// `target`.
///
/// The handler's return value is the action's return value. If the action
/// fails, the machine stays in its current state.
///
/// # Example
///
/// ```
/// use statesmith::machine::{transition_to_with, Handler};
///
/// let close: Handler<String, i64, (), ()> =
///     transition_to_with("closed".to_string(), |balance: &mut i64, _: &()| {
///         *balance = 0;
///         Ok(())
///     });
/// assert!(close.is_transition());
/// ```
pub fn transition_to_with<S, D, A, R, F>(target: S, action: F) -> Handler<S, D, A, R>
where
    S: State,
    F: Fn(&mut D, &A) -> Result<R, ActionError> + Send + Sync + 'static,
{
    Handler {
        action: Arc::new(action),
        target: Some(target),
    }
}
