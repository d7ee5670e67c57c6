//! Statesmith: declarative finite-state machines
//!
//! A machine is described by its initial data and a states map: every state
//! owns a table of event handlers. The machine exposes the union of all
//! events across all states, but only the current state's handlers are
//! active. Dispatching an event the current state does not handle is a
//! no-op reported through `tracing` and the machine's observers.
//!
//! # Core Concepts
//!
//! - **State / Event**: typed keys via the `State` and `Event` traits
//! - **Handlers**: actions that receive the machine data explicitly
//! - **Transitions**: handlers built with `transition_to`, switching state
//!   only after their action succeeds
//! - **History**: immutable record of every transition taken
//!
//! # Example
//!
//! ```rust
//! use statesmith::builder::DescriptionBuilder;
//! use statesmith::machine::{transition_to, transition_to_with, StateDefinition};
//! use statesmith::{event_enum, state_enum};
//!
//! state_enum! {
//!     enum Door {
//!         Open,
//!         Closed,
//!     }
//! }
//!
//! event_enum! {
//!     enum Action {
//!         Close,
//!         Open,
//!     }
//! }
//!
//! let mut door = DescriptionBuilder::<Door, Action, u32, (), ()>::new()
//!     .data(0)
//!     .state(
//!         Door::Open,
//!         StateDefinition::new().on_handler(
//!             Action::Close,
//!             transition_to_with(Door::Closed, |slams: &mut u32, _: &()| {
//!                 *slams += 1;
//!                 Ok(())
//!             }),
//!         ),
//!     )
//!     .state(
//!         Door::Closed,
//!         StateDefinition::new().on_handler(Action::Open, transition_to(Door::Open)),
//!     )
//!     .starting(Door::Open)
//!     .build_machine()
//!     .unwrap();
//!
//! door.fire(&Action::Close).unwrap();
//! assert_eq!(door.current_state(), &Door::Closed);
//!
//! // Closed has no handler for Close: ignored, nothing returned.
//! assert_eq!(door.fire(&Action::Close).unwrap(), None);
//! assert_eq!(*door.data(), 1);
//! ```

pub mod builder;
pub mod core;
pub mod machine;

// Re-export commonly used types
pub use crate::builder::{BuildError, DescriptionBuilder};
pub use crate::core::{Event, State, StateHistory, StateTransition};
pub use crate::machine::{
    transition_to, transition_to_with, ActionError, Description, DispatchError, Handler,
    StateDefinition, StateMachine, TransitionObserver,
};
