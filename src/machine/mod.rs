//! Machines built from declarative descriptions.
//!
//! A [`Description`] pairs initial data with a states map: each state owns
//! a table of event handlers. [`StateMachine::new`] validates the
//! description and produces a live machine exposing the union of all
//! events. Dispatching an event runs the current state's handler, if any.
//!
//! # Key Concepts
//!
//! - **Handlers**: actions receiving the machine data explicitly
//! - **Transitions**: handlers built with [`transition_to`] that switch the
//!   current state once their action succeeds
//! - **Observers**: explicit callbacks for transitions and ignored events,
//!   alongside `tracing` diagnostics

mod definition;
mod error;
mod handler;
#[allow(clippy::module_inception)]
mod machine;
mod observer;

pub use definition::{Description, StateDefinition, StatesMap};
pub use error::{ActionError, DispatchError};
pub use handler::{transition_to, transition_to_with, Action, Handler};
pub use machine::{event_union, validate, StateMachine};
pub use observer::TransitionObserver;
