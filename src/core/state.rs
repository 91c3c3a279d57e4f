//! Opaque state and event identifiers.
//!
//! States and events are free-form comparable tokens rather than closed
//! enums, keeping the engine generic across unrelated domains. They carry
//! no ordering semantics; equality and hashing are all the engine needs.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named point in a machine's domain-specific lifecycle.
///
/// # Example
///
/// ```rust
/// use trellis::State;
///
/// let state = State::new("processing");
/// assert_eq!(state, "processing");
/// assert_eq!(state.as_str(), "processing");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct State(String);

impl State {
    /// Create a state from any string-like name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The state's name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for State {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for State {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl AsRef<str> for State {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<&str> for State {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl PartialEq<State> for &str {
    fn eq(&self, other: &State) -> bool {
        *self == other.0
    }
}

/// A named trigger causing a potential state change.
///
/// Events are scoped per-transition; there is no global event registry.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Event(String);

impl Event {
    /// Create an event from any string-like name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The event's name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Event {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for Event {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl AsRef<str> for Event {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<&str> for Event {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl PartialEq<Event> for &str {
    fn eq(&self, other: &Event) -> bool {
        *self == other.0
    }
}
