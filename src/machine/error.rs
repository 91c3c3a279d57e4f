//! Errors surfaced by `Machine::trigger`.

use crate::core::{DynError, Event, State};
use thiserror::Error;

/// Failure to resolve or start a transition.
///
/// Raised when no transition matches the current (state, event) pair, or
/// when a matched transition contains an action with no transform bound.
/// Carries the originating state and event for diagnosis.
#[derive(Debug, Error)]
#[error("transition error in state '{state}' on event '{event}': {message}")]
pub struct TransitionError {
    /// State the machine was in when the trigger failed.
    pub state: State,
    /// Event that was triggered.
    pub event: Event,
    /// What went wrong.
    pub message: String,
    /// Underlying cause, absent in the no-match case.
    #[source]
    pub source: Option<DynError>,
}

impl TransitionError {
    /// Create a transition error without an underlying cause.
    pub fn new(state: State, event: Event, message: impl Into<String>) -> Self {
        Self {
            state,
            event,
            message: message.into(),
            source: None,
        }
    }
}

/// Error returned by `Machine::trigger`.
///
/// Engine-level failures arrive as [`TriggerError::Transition`]; whatever
/// an action returned arrives as [`TriggerError::Action`] carrying the
/// boxed error unwrapped, so callers can downcast it to the action's own
/// error type.
#[derive(Debug, Error)]
pub enum TriggerError {
    /// The engine could not resolve or start a transition.
    #[error(transparent)]
    Transition(#[from] TransitionError),

    /// An action transform failed; the original error, not wrapped.
    #[error("{0}")]
    Action(DynError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transition_error_display_names_state_and_event() {
        let err = TransitionError::new("done".into(), "start".into(), "no transition found");
        assert_eq!(
            err.to_string(),
            "transition error in state 'done' on event 'start': no transition found"
        );
    }

    #[test]
    fn trigger_error_is_transparent_for_transitions() {
        let err: TriggerError =
            TransitionError::new("a".into(), "x".into(), "no transition found").into();
        assert_eq!(
            err.to_string(),
            "transition error in state 'a' on event 'x': no transition found"
        );
    }

    #[test]
    fn action_variant_displays_the_original_error() {
        let err = TriggerError::Action("disk full".into());
        assert_eq!(err.to_string(), "disk full");
    }
}
