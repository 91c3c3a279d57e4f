//! Payload-transforming actions executed during transitions.

use super::state::{Event, State};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Boxed error returned by action transforms.
///
/// Whatever an action returns is propagated to the `trigger` caller
/// unchanged; downcast it to distinguish business failures from engine
/// failures.
pub type DynError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Transform applied to the payload during a transition.
///
/// Receives the caller-supplied context by shared reference and the payload
/// by exclusive borrow. The transform may mutate the payload in place or
/// replace it wholesale by assigning through the borrow; ownership stays
/// with the `trigger` caller throughout.
pub type ActionFn<T, C> = Arc<dyn Fn(&C, &mut T) -> Result<(), DynError> + Send + Sync>;

/// One step of payload transformation in a transition's chain.
///
/// The name is diagnostic metadata only, not an identity key; a chain may
/// reuse the same name. An action without a bound transform fails the
/// chain at execution time, which is useful for stubbing out steps that
/// are not wired up yet.
///
/// # Example
///
/// ```rust
/// use trellis::Action;
///
/// let prefix = Action::new("prefix", |_ctx: &(), value: &mut String| {
///     value.insert_str(0, "processed: ");
///     Ok(())
/// });
/// assert_eq!(prefix.name(), "prefix");
/// ```
pub struct Action<T, C = ()> {
    name: String,
    transform: Option<ActionFn<T, C>>,
}

impl<T, C> Action<T, C> {
    /// Create an action with a bound transform.
    pub fn new<F>(name: impl Into<String>, transform: F) -> Self
    where
        F: Fn(&C, &mut T) -> Result<(), DynError> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            transform: Some(Arc::new(transform)),
        }
    }

    /// Create an action with no transform bound.
    ///
    /// Executing it fails the transition with "no handler function defined".
    pub fn unbound(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            transform: None,
        }
    }

    /// The action's diagnostic name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn transform(&self) -> Option<&ActionFn<T, C>> {
        self.transform.as_ref()
    }
}

impl<T, C> Clone for Action<T, C> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            transform: self.transform.clone(),
        }
    }
}

impl<T, C> fmt::Debug for Action<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action")
            .field("name", &self.name)
            .field("bound", &self.transform.is_some())
            .finish()
    }
}

/// Contextual error for action authors.
///
/// The engine never wraps action failures in this type; it exists for
/// transforms that want to report which action failed where. It is
/// propagated through `trigger` like any other action error.
#[derive(Debug, Error)]
#[error("action error executing '{action}' in state '{state}' (event '{event}'): {source}")]
pub struct ActionError {
    /// Diagnostic name of the failing action.
    pub action: String,
    /// State the machine was in when the action ran.
    pub state: State,
    /// Event that triggered the transition.
    pub event: Event,
    /// The underlying failure.
    #[source]
    pub source: DynError,
}

impl ActionError {
    /// Create an action error wrapping an underlying failure.
    pub fn new(
        action: impl Into<String>,
        state: impl Into<State>,
        event: impl Into<Event>,
        source: impl Into<DynError>,
    ) -> Self {
        Self {
            action: action.into(),
            state: state.into(),
            event: event.into(),
            source: source.into(),
        }
    }
}
