//! The transition engine: locking, triggering, and error fallback.

mod engine;
mod error;
mod options;

pub use engine::Machine;
pub use error::{TransitionError, TriggerError};
pub use options::MachineOptions;
