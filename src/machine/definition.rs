//! State definitions and machine descriptions.

use crate::core::{Event, State};
use crate::machine::error::ActionError;
use crate::machine::handler::Handler;
use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;

/// Map from state to its handler table. Iteration follows insertion order.
pub type StatesMap<S, E, D, A, R> = IndexMap<S, StateDefinition<S, E, D, A, R>>;

/// Handler table of one state: event -> handler.
///
/// # Example
///
/// ```
/// use statesmith::machine::{transition_to, StateDefinition};
///
/// let open: StateDefinition<String, String, i64, i64, ()> = StateDefinition::new()
///     .on("deposit".to_string(), |balance: &mut i64, amount: &i64| {
///         *balance += amount;
///         Ok(())
///     })
///     .on_handler("place_hold".to_string(), transition_to("held".to_string()));
///
/// assert_eq!(open.len(), 2);
/// assert!(open.handles(&"deposit".to_string()));
/// ```
pub struct StateDefinition<S, E, D, A, R> {
    handlers: IndexMap<E, Handler<S, D, A, R>>,
}

impl<S: State, E: Event, D, A, R> StateDefinition<S, E, D, A, R> {
    pub fn new() -> Self {
        Self {
            handlers: IndexMap::new(),
        }
    }

    /// Register a handler that runs `action` and keeps the current state.
    ///
    /// Registering the same event twice replaces the earlier handler.
    pub fn on<F>(self, event: E, action: F) -> Self
    where
        F: Fn(&mut D, &A) -> Result<R, ActionError> + Send + Sync + 'static,
    {
        self.on_handler(event, Handler::new(action))
    }

    /// Register a prebuilt handler, typically from
    /// [`transition_to`](crate::machine::transition_to).
    pub fn on_handler(mut self, event: E, handler: Handler<S, D, A, R>) -> Self {
        self.handlers.insert(event, handler);
        self
    }

    pub fn get(&self, event: &E) -> Option<&Handler<S, D, A, R>> {
        self.handlers.get(event)
    }

    pub fn handles(&self, event: &E) -> bool {
        self.handlers.contains_key(event)
    }

    /// Events handled in this state, in registration order.
    pub fn events(&self) -> impl Iterator<Item = &E> {
        self.handlers.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&E, &Handler<S, D, A, R>)> {
        self.handlers.iter()
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl<S: State, E: Event, D, A, R> Default for StateDefinition<S, E, D, A, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Clone, E: Clone, D, A, R> Clone for StateDefinition<S, E, D, A, R> {
    fn clone(&self) -> Self {
        Self {
            handlers: self.handlers.clone(),
        }
    }
}

impl<S: fmt::Debug, E: fmt::Debug, D, A, R> fmt::Debug for StateDefinition<S, E, D, A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.handlers.iter()).finish()
    }
}

/// Declarative input to [`StateMachine::new`](crate::machine::StateMachine::new).
///
/// Keeps the initial instance data, the states map and the starting state
/// in separate fields. The states map sits behind an `Arc`, so every
/// machine built from the same description shares it read-only while
/// owning its own copy of the data.
pub struct Description<S, E, D, A, R> {
    initial_data: D,
    states: Arc<StatesMap<S, E, D, A, R>>,
    starting_state: S,
}

impl<S: State, E: Event, D, A, R> Description<S, E, D, A, R> {
    /// Assemble a description without validating it.
    ///
    /// Validation happens when a machine is built from it. Use
    /// [`DescriptionBuilder`](crate::builder::DescriptionBuilder) for a
    /// fluent construction API.
    pub fn new(initial_data: D, states: StatesMap<S, E, D, A, R>, starting_state: S) -> Self {
        Self {
            initial_data,
            states: Arc::new(states),
            starting_state,
        }
    }

    pub fn initial_data(&self) -> &D {
        &self.initial_data
    }

    pub fn states(&self) -> &Arc<StatesMap<S, E, D, A, R>> {
        &self.states
    }

    pub fn starting_state(&self) -> &S {
        &self.starting_state
    }
}

impl<S: fmt::Debug, E: fmt::Debug, D: fmt::Debug, A, R> fmt::Debug for Description<S, E, D, A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Description")
            .field("initial_data", &self.initial_data)
            .field("states", &self.states)
            .field("starting_state", &self.starting_state)
            .finish()
    }
}
