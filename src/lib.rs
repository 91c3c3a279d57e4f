//! Trellis: an embeddable finite state machine engine.
//!
//! Callers define named states, named events, and transitions between
//! states triggered by events; each transition optionally runs an ordered
//! chain of payload-transforming actions. The machine tracks the current
//! state, validates triggers against its transition table, and falls back
//! to a configurable error state on any failure.
//!
//! # Core Concepts
//!
//! - **States and events**: free-form comparable tokens ([`State`],
//!   [`Event`]), not closed enums, so the engine stays generic across
//!   unrelated domains
//! - **Actions**: named payload transforms ([`Action`]) chained per
//!   transition, short-circuiting on the first failure
//! - **Error fallback**: an optional (error state, handler) pair invoked
//!   whenever a trigger fails
//! - **One lock**: the machine is safe to share across threads; every
//!   transition is atomic with respect to the observable state
//!
//! # Example
//!
//! ```rust
//! use trellis::{Action, Machine};
//!
//! struct Order {
//!     data: String,
//! }
//!
//! let machine: Machine<Order> = Machine::new("idle");
//! machine.register_state("processing")?;
//! machine.register_state("done")?;
//!
//! let process = Action::new("process_order", |_ctx: &(), order: &mut Order| {
//!     order.data = format!("processed: {}", order.data);
//!     Ok(())
//! });
//! machine.add_transition("idle", "processing", "start", vec![process]);
//! machine.add_transition("processing", "done", "complete", Vec::new());
//!
//! let mut order = Order {
//!     data: "x".to_string(),
//! };
//! machine.trigger(&(), "start", &mut order)?;
//! assert_eq!(order.data, "processed: x");
//! assert_eq!(machine.current_state(), "processing");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Diagnostics are emitted as structured [`tracing`] events; install any
//! subscriber you like, or use [`telemetry::init`] for a quick setup.

pub mod core;
pub mod machine;
pub mod telemetry;

// Re-export the full API surface at the crate root.
pub use crate::core::{
    Action, ActionError, ActionFn, DynError, Event, State, StateError, StateRegistry, Transition,
    TransitionTable,
};
pub use crate::machine::{Machine, MachineOptions, TransitionError, TriggerError};
