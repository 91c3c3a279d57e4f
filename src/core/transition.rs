//! Transition records and the append-only transition table.

use super::action::Action;
use super::state::{Event, State};
use std::fmt;

/// Rule mapping (from state, event) to a target state and an action chain.
///
/// Nothing validates that `from` or `to` are registered with a machine;
/// that is a caller obligation, and targeting an unregistered state leaves
/// the machine's current state outside its registry.
pub struct Transition<T, C = ()> {
    /// State the machine must be in for this transition to match.
    pub from: State,
    /// State committed after the action chain succeeds.
    pub to: State,
    /// Event that triggers the transition.
    pub event: Event,
    /// Ordered chain of payload transforms; may be empty.
    pub actions: Vec<Action<T, C>>,
}

impl<T, C> Clone for Transition<T, C> {
    fn clone(&self) -> Self {
        Self {
            from: self.from.clone(),
            to: self.to.clone(),
            event: self.event.clone(),
            actions: self.actions.clone(),
        }
    }
}

impl<T, C> fmt::Debug for Transition<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transition")
            .field("from", &self.from)
            .field("to", &self.to)
            .field("event", &self.event)
            .field("actions", &self.actions)
            .finish()
    }
}

/// Ordered, append-only collection of transitions.
///
/// Appending never fails and never checks for duplicates: when two records
/// share a (from, event) pair, [`lookup`](Self::lookup) returns whichever
/// was inserted first. First-match-wins is the documented tie-break, not a
/// disambiguation mechanism callers should rely on.
pub struct TransitionTable<T, C = ()> {
    transitions: Vec<Transition<T, C>>,
}

impl<T, C> TransitionTable<T, C> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Append a transition, preserving insertion order.
    pub fn append(&mut self, transition: Transition<T, C>) {
        self.transitions.push(transition);
    }

    /// Find the first transition matching (from, event), by insertion order.
    // TODO: index by (from, event) once tables get large enough to care;
    // the index must keep returning the earliest insertion for duplicates.
    pub fn lookup(&self, from: &State, event: &Event) -> Option<&Transition<T, C>> {
        self.transitions
            .iter()
            .find(|t| t.from == *from && t.event == *event)
    }

    /// Number of recorded transitions.
    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    /// Whether the table has no transitions.
    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}

impl<T, C> Default for TransitionTable<T, C> {
    fn default() -> Self {
        Self::new()
    }
}
