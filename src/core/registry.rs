//! Capacity-bounded collection of unique states.

use super::state::State;
use std::collections::HashSet;
use thiserror::Error;

/// Errors raised while registering states.
#[derive(Debug, Error)]
pub enum StateError {
    /// The state is already a member of the registry.
    #[error("state '{0}' already exists")]
    AlreadyExists(State),

    /// Adding the state would exceed the configured maximum.
    #[error("maximum number of states exceeded registering '{0}'")]
    CapacityExceeded(State),
}

/// Set of registered states with an optional maximum size.
///
/// The registry only grows: states are never removed for the lifetime of
/// the machine that owns it. Iteration order is not meaningful.
#[derive(Debug, Default)]
pub struct StateRegistry {
    states: HashSet<State>,
    max_size: usize,
}

impl StateRegistry {
    /// Create a registry capped at `max_size` states (0 = unlimited).
    pub fn new(max_size: usize) -> Self {
        Self {
            states: HashSet::new(),
            max_size,
        }
    }

    fn limit_reached(&self) -> bool {
        self.max_size > 0 && self.states.len() >= self.max_size
    }

    /// Insert a new state.
    ///
    /// Fails with [`StateError::AlreadyExists`] on a duplicate and
    /// [`StateError::CapacityExceeded`] when the cap would be exceeded;
    /// either way the registry is left unchanged.
    pub fn add(&mut self, state: State) -> Result<(), StateError> {
        if self.states.contains(&state) {
            return Err(StateError::AlreadyExists(state));
        }
        if self.limit_reached() {
            return Err(StateError::CapacityExceeded(state));
        }
        self.states.insert(state);
        Ok(())
    }

    /// Whether the state is a member of the registry.
    pub fn exists(&self, state: &State) -> bool {
        self.states.contains(state)
    }

    /// Snapshot of all registered states, in no particular order.
    pub fn keys(&self) -> Vec<State> {
        self.states.iter().cloned().collect()
    }

    /// Number of registered states.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Whether no states have been registered.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}
