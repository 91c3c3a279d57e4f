//! Pure data model: identifiers, the state registry, actions, and the
//! transition table.
//!
//! Nothing in this module locks or logs; the [`machine`](crate::machine)
//! module wires these pieces together behind the engine's lock.

mod action;
mod registry;
mod state;
mod transition;

pub use action::{Action, ActionError, ActionFn, DynError};
pub use registry::{StateError, StateRegistry};
pub use state::{Event, State};
pub use transition::{Transition, TransitionTable};
