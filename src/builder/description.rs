//! Builder for constructing machine descriptions.

use crate::builder::error::BuildError;
use crate::core::{Event, State};
use crate::machine::{validate, Description, StateDefinition, StateMachine, StatesMap};
use indexmap::IndexMap;

/// Builder for constructing descriptions with a fluent API.
///
/// # Example
///
/// ```
/// use statesmith::builder::DescriptionBuilder;
/// use statesmith::machine::{transition_to, StateDefinition};
///
/// let mut machine = DescriptionBuilder::<String, String, u32, (), ()>::new()
///     .data(0)
///     .state(
///         "idle".to_string(),
///         StateDefinition::new().on_handler("start".to_string(), transition_to("busy".to_string())),
///     )
///     .state(
///         "busy".to_string(),
///         StateDefinition::new().on_handler("stop".to_string(), transition_to("idle".to_string())),
///     )
///     .starting("idle".to_string())
///     .build_machine()
///     .unwrap();
///
/// machine.fire(&"start".to_string()).unwrap();
/// assert_eq!(machine.current_state(), "busy");
/// ```
pub struct DescriptionBuilder<S, E, D, A, R> {
    data: Option<D>,
    states: StatesMap<S, E, D, A, R>,
    starting: Option<S>,
    duplicate: Option<S>,
}

impl<S: State, E: Event, D, A, R> DescriptionBuilder<S, E, D, A, R> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            data: None,
            states: IndexMap::new(),
            starting: None,
            duplicate: None,
        }
    }

    /// Set the initial instance data (required).
    pub fn data(mut self, data: D) -> Self {
        self.data = Some(data);
        self
    }

    /// Add a state and its handler table.
    ///
    /// Adding the same state twice makes `build` fail.
    pub fn state(mut self, state: S, definition: StateDefinition<S, E, D, A, R>) -> Self {
        if self.states.contains_key(&state) {
            self.duplicate.get_or_insert(state);
        } else {
            self.states.insert(state, definition);
        }
        self
    }

    /// Add multiple states at once.
    pub fn states<I>(self, states: I) -> Self
    where
        I: IntoIterator<Item = (S, StateDefinition<S, E, D, A, R>)>,
    {
        states
            .into_iter()
            .fold(self, |builder, (state, definition)| builder.state(state, definition))
    }

    /// Set the starting state (required).
    pub fn starting(mut self, state: S) -> Self {
        self.starting = Some(state);
        self
    }

    /// Build the description.
    ///
    /// Returns an error if required fields are missing, a state was added
    /// twice, or a state reference does not resolve.
    pub fn build(self) -> Result<Description<S, E, D, A, R>, BuildError> {
        let data = self.data.ok_or(BuildError::MissingInitialData)?;
        let starting = self.starting.ok_or(BuildError::MissingStartingState)?;

        if let Some(state) = self.duplicate {
            return Err(BuildError::DuplicateState {
                state: state.name().to_string(),
            });
        }

        validate(&self.states, &starting)?;

        Ok(Description::new(data, self.states, starting))
    }

    /// Build the description and a machine from it.
    pub fn build_machine(self) -> Result<StateMachine<S, E, D, A, R>, BuildError>
    where
        D: Clone,
    {
        StateMachine::new(&self.build()?)
    }
}

impl<S: State, E: Event, D, A, R> Default for DescriptionBuilder<S, E, D, A, R> {
    fn default() -> Self {
        Self::new()
    }
}
