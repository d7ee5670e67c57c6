//! State machine built from a description.

use crate::builder::BuildError;
use crate::core::{Event, State, StateHistory, StateTransition};
use crate::machine::definition::{Description, StateDefinition, StatesMap};
use crate::machine::error::DispatchError;
use crate::machine::observer::TransitionObserver;
use chrono::Utc;
use indexmap::IndexSet;
use std::fmt;
use std::sync::Arc;

/// Collect every event handled by any state, deduplicated.
///
/// Order: states in insertion order, then events in registration order
/// within each state.
pub fn event_union<S, E, D, A, R>(states: &StatesMap<S, E, D, A, R>) -> IndexSet<E>
where
    S: State,
    E: Event,
{
    states
        .values()
        .flat_map(|definition| definition.events())
        .cloned()
        .collect()
}

/// Check that the starting state and every transition target name a state
/// present in `states`.
pub fn validate<S, E, D, A, R>(
    states: &StatesMap<S, E, D, A, R>,
    starting_state: &S,
) -> Result<(), BuildError>
where
    S: State,
    E: Event,
{
    if states.is_empty() {
        return Err(BuildError::NoStates);
    }

    if !states.contains_key(starting_state) {
        return Err(BuildError::UnknownStartingState {
            state: starting_state.name().to_string(),
        });
    }

    for (state, definition) in states {
        for (event, handler) in definition.iter() {
            match handler.target() {
                Some(target) if !states.contains_key(target) => {
                    return Err(BuildError::UnknownTransitionTarget {
                        state: state.name().to_string(),
                        event: event.name().to_string(),
                        target: target.name().to_string(),
                    });
                }
                _ => {}
            }
        }
    }

    Ok(())
}

/// A live state machine.
///
/// The machine exposes the union of the events of all its states. Which of
/// them do something depends on the current state: an event the current
/// state has no handler for is ignored with a diagnostic.
///
/// Dispatch takes `&mut self`; events on one machine are handled one at a
/// time, each running to completion.
pub struct StateMachine<S: State, E: Event, D, A = (), R = ()> {
    data: D,
    states: Arc<StatesMap<S, E, D, A, R>>,
    events: IndexSet<E>,
    current: S,
    history: StateHistory<S, E>,
    observers: Vec<Box<dyn TransitionObserver<S, E>>>,
}

impl<S: State, E: Event, D, A, R> StateMachine<S, E, D, A, R> {
    /// Build a machine from a description.
    ///
    /// The machine gets its own copy of the description's initial data and
    /// shares its states map. Fails if the states map is empty, or if the
    /// starting state or any transition target is not a key of it.
    pub fn new(description: &Description<S, E, D, A, R>) -> Result<Self, BuildError>
    where
        D: Clone,
    {
        let states = Arc::clone(description.states());
        let starting_state = description.starting_state().clone();

        validate(&states, &starting_state)?;
        let events = event_union(&states);

        tracing::debug!(
            starting_state = starting_state.name(),
            states = states.len(),
            events = events.len(),
            "State machine built"
        );

        Ok(Self {
            data: description.initial_data().clone(),
            states,
            events,
            current: starting_state,
            history: StateHistory::new(),
            observers: Vec::new(),
        })
    }

    /// Register an observer.
    pub fn add_observer<O>(&mut self, observer: O)
    where
        O: TransitionObserver<S, E> + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    /// Register an observer, builder style.
    pub fn with_observer<O>(mut self, observer: O) -> Self
    where
        O: TransitionObserver<S, E> + 'static,
    {
        self.add_observer(observer);
        self
    }

    /// Dispatch `event` with `args` to the current state's handler.
    ///
    /// - `Err(UnknownEvent)` if no state of this machine handles `event`.
    /// - `Ok(None)` if the current state has no handler for `event`. State
    ///   and data are left untouched.
    /// - `Ok(Some(value))` with the handler's return value otherwise. A
    ///   transition handler switches the current state after its action
    ///   returns `Ok`; a failed action leaves the state unchanged.
    pub fn dispatch(&mut self, event: &E, args: A) -> Result<Option<R>, DispatchError> {
        if !self.events.contains(event) {
            return Err(DispatchError::UnknownEvent {
                event: event.name().to_string(),
            });
        }

        let Some(handler) = self
            .states
            .get(&self.current)
            .and_then(|definition| definition.get(event))
        else {
            self.reject(event);
            return Ok(None);
        };

        let target = handler.target().cloned();
        let value = handler
            .run(&mut self.data, &args)
            .map_err(|source| DispatchError::ActionFailed {
                state: self.current.name().to_string(),
                event: event.name().to_string(),
                source,
            })?;

        if let Some(target) = target {
            self.enter(target, event);
        }

        Ok(Some(value))
    }

    /// Dispatch an event that takes no arguments.
    pub fn fire(&mut self, event: &E) -> Result<Option<R>, DispatchError>
    where
        A: Default,
    {
        self.dispatch(event, A::default())
    }

    fn enter(&mut self, target: S, event: &E) {
        let transition = StateTransition {
            from: self.current.clone(),
            to: target,
            event: event.clone(),
            timestamp: Utc::now(),
        };

        tracing::info!(
            from = transition.from.name(),
            to = transition.to.name(),
            event = event.name(),
            "Transition to state: {}",
            transition.to.name()
        );

        self.current = transition.to.clone();
        for observer in &self.observers {
            observer.on_transition(&transition);
        }
        self.history = self.history.record(transition);
    }

    fn reject(&self, event: &E) {
        tracing::warn!(
            state = self.current.name(),
            event = event.name(),
            "invalid event {}",
            event.name()
        );

        for observer in &self.observers {
            observer.on_invalid_event(&self.current, event);
        }
    }

    /// Get current state (pure)
    pub fn current_state(&self) -> &S {
        &self.current
    }

    /// Handler table of the current state.
    pub fn current_definition(&self) -> &StateDefinition<S, E, D, A, R> {
        // Construction validated the starting state and every target.
        &self.states[&self.current]
    }

    /// Check if machine is in a final state (pure)
    pub fn is_final(&self) -> bool {
        self.current.is_final()
    }

    /// Every event this machine exposes, whatever the current state.
    pub fn events(&self) -> impl Iterator<Item = &E> {
        self.events.iter()
    }

    /// Events the current state has a handler for.
    pub fn active_events(&self) -> impl Iterator<Item = &E> {
        self.current_definition().events()
    }

    /// Check if the current state handles `event`.
    pub fn handles(&self, event: &E) -> bool {
        self.current_definition().handles(event)
    }

    /// All states, in description order.
    pub fn states(&self) -> impl Iterator<Item = &S> {
        self.states.keys()
    }

    /// Shared states map.
    pub fn states_map(&self) -> &Arc<StatesMap<S, E, D, A, R>> {
        &self.states
    }

    /// Transition edges `(state, event, target)` declared by the states map.
    ///
    /// Handlers without a target are self-loops and are not listed.
    pub fn transitions(&self) -> Vec<(&S, &E, &S)> {
        self.states
            .iter()
            .flat_map(|(state, definition)| {
                definition
                    .iter()
                    .filter_map(move |(event, handler)| {
                        handler.target().map(|target| (state, event, target))
                    })
            })
            .collect()
    }

    pub fn data(&self) -> &D {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut D {
        &mut self.data
    }

    /// Get state history (pure)
    pub fn history(&self) -> &StateHistory<S, E> {
        &self.history
    }
}

impl<S: State, E: Event, D: fmt::Debug, A, R> fmt::Debug for StateMachine<S, E, D, A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateMachine")
            .field("current", &self.current)
            .field("data", &self.data)
            .field("events", &self.events)
            .field("transitions", &self.history.len())
            .field("observers", &self.observers.len())
            .finish()
    }
}
