//! The transition engine.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, error, info, warn};

use crate::core::{
    Action, ActionFn, Event, State, StateError, StateRegistry, Transition, TransitionTable,
};
use crate::machine::error::{TransitionError, TriggerError};
use crate::machine::options::MachineOptions;

/// A finite state machine over payload type `T` with caller context `C`.
///
/// The machine owns its current state, state registry, transition table,
/// and error-fallback configuration behind a single lock: every mutating
/// operation holds the write lock for its full duration, so a transition
/// is atomic with respect to the observable state. One action chain
/// running inside [`trigger`](Self::trigger) blocks all other operations
/// on the same machine until it completes.
///
/// # Example
///
/// ```rust
/// use trellis::{Action, Machine};
///
/// struct Request {
///     data: String,
/// }
///
/// let machine: Machine<Request> = Machine::new("idle");
/// machine.register_state("processing").unwrap();
/// machine.register_state("done").unwrap();
///
/// let process = Action::new("process_request", |_ctx: &(), req: &mut Request| {
///     req.data = format!("processed: {}", req.data);
///     Ok(())
/// });
/// machine.add_transition("idle", "processing", "start", vec![process]);
/// machine.add_transition("processing", "done", "complete", Vec::new());
///
/// let mut req = Request {
///     data: "x".to_string(),
/// };
/// machine.trigger(&(), "start", &mut req).unwrap();
/// assert_eq!(req.data, "processed: x");
/// assert_eq!(machine.current_state(), "processing");
///
/// machine.trigger(&(), "complete", &mut req).unwrap();
/// assert_eq!(machine.current_state(), "done");
/// ```
pub struct Machine<T, C = ()> {
    inner: RwLock<Inner<T, C>>,
}

struct Inner<T, C> {
    current: State,
    states: StateRegistry,
    transitions: TransitionTable<T, C>,
    error_state: Option<State>,
    error_handler: Option<ActionFn<T, C>>,
}

impl<T, C> Machine<T, C> {
    /// Create a machine in `initial` with default options.
    ///
    /// The initial state is auto-registered.
    pub fn new(initial: impl Into<State>) -> Self {
        Self::with_options(initial, MachineOptions::default())
    }

    /// Create a machine in `initial` with the given options.
    ///
    /// # Panics
    ///
    /// Panics only if registering the initial state into a freshly created
    /// registry fails, which no option combination can cause.
    pub fn with_options(initial: impl Into<State>, options: MachineOptions) -> Self {
        let initial = initial.into();
        let mut states = StateRegistry::new(options.state_capacity());
        if let Err(err) = states.add(initial.clone()) {
            panic!("failed to register initial state: {err}");
        }

        info!(initial_state = %initial, "machine initialized");

        Self {
            inner: RwLock::new(Inner {
                current: initial,
                states,
                transitions: TransitionTable::new(),
                error_state: None,
                error_handler: None,
            }),
        }
    }

    /// Register a new state.
    pub fn register_state(&self, state: impl Into<State>) -> Result<(), StateError> {
        let state = state.into();
        let mut inner = self.write();
        inner.states.add(state.clone())?;
        debug!(state = %state, "state registered");
        Ok(())
    }

    /// Record a transition from `from` to `to` on `event`, running `actions`
    /// in order.
    ///
    /// Neither `from` nor `to` is checked against the registry; registering
    /// the states involved is the caller's obligation. Duplicate
    /// (from, event) pairs are accepted; the first one recorded wins at
    /// trigger time.
    pub fn add_transition(
        &self,
        from: impl Into<State>,
        to: impl Into<State>,
        event: impl Into<Event>,
        actions: Vec<Action<T, C>>,
    ) {
        let transition = Transition {
            from: from.into(),
            to: to.into(),
            event: event.into(),
            actions,
        };

        let action_names: Vec<&str> = transition.actions.iter().map(Action::name).collect();
        debug!(
            from = %transition.from,
            to = %transition.to,
            event = %transition.event,
            actions = ?action_names,
            "transition registered"
        );

        self.write().transitions.append(transition);
    }

    /// Trigger `event`, attempting to transition out of the current state.
    ///
    /// On a match, the transition's actions run in order against `payload`;
    /// when all succeed the target state is committed. On any failure (no
    /// matching transition, an unbound action, or an action error) the
    /// error fallback runs if one is configured (see
    /// [`set_error_handler`](Self::set_error_handler)), the target state is
    /// not committed, and the failure is returned: engine failures as
    /// [`TriggerError::Transition`], action errors unwrapped as
    /// [`TriggerError::Action`].
    ///
    /// The write lock is held for the entire call, actions included. The
    /// engine never inspects `ctx`; deadlines and cancellation are the
    /// actions' business.
    pub fn trigger(
        &self,
        ctx: &C,
        event: impl Into<Event>,
        payload: &mut T,
    ) -> Result<(), TriggerError> {
        let event = event.into();
        let mut inner = self.write();

        debug!(current_state = %inner.current, event = %event, "trigger invoked");

        let (to, actions) = match inner.transitions.lookup(&inner.current, &event) {
            Some(transition) => (transition.to.clone(), transition.actions.clone()),
            None => {
                warn!(state = %inner.current, event = %event, "no transition found");
                let err =
                    TransitionError::new(inner.current.clone(), event, "no transition found");
                inner.handle_error(ctx, payload, &err);
                return Err(err.into());
            }
        };

        info!(from = %inner.current, to = %to, event = %event, "transitioning");

        for action in &actions {
            let Some(transform) = action.transform() else {
                error!(
                    action = action.name(),
                    state = %inner.current,
                    event = %event,
                    "action has no transform bound"
                );
                let err = TransitionError::new(
                    inner.current.clone(),
                    event.clone(),
                    "no handler function defined",
                );
                inner.handle_error(ctx, payload, &err);
                return Err(err.into());
            };

            debug!(
                action = action.name(),
                state = %inner.current,
                event = %event,
                "executing action"
            );

            if let Err(err) = transform(ctx, payload) {
                error!(
                    error = %err,
                    action = action.name(),
                    state = %inner.current,
                    event = %event,
                    "action failed"
                );
                inner.handle_error(ctx, payload, err.as_ref());
                return Err(TriggerError::Action(err));
            }

            debug!(action = action.name(), "action completed");
        }

        inner.current = to;
        info!(new_state = %inner.current, "transition completed");
        Ok(())
    }

    /// The current state.
    pub fn current_state(&self) -> State {
        self.read().current.clone()
    }

    /// Snapshot of all registered states, in no particular order.
    pub fn registered_states(&self) -> Vec<State> {
        self.read().states.keys()
    }

    /// Overwrite the current state, bypassing the transition table.
    ///
    /// An explicit escape hatch: no transition is consulted, no actions
    /// run, and the state is not validated against the registry.
    pub fn set_state(&self, state: impl Into<State>) {
        let state = state.into();
        let mut inner = self.write();
        warn!(
            old_state = %inner.current,
            new_state = %state,
            "state manually set, bypassing transitions"
        );
        inner.current = state;
    }

    /// Install or replace the error-fallback configuration.
    ///
    /// After any failing trigger, the handler (if present) is invoked with
    /// the current payload, then the machine moves to `error_state` (if
    /// present) regardless of what the handler did. A handler's own error
    /// is logged, never returned; the original triggering error always
    /// wins. Each call fully replaces the previous configuration.
    pub fn set_error_handler(&self, error_state: Option<State>, handler: Option<ActionFn<T, C>>) {
        let mut inner = self.write();
        inner.error_state = error_state;
        inner.error_handler = handler;
    }

    fn read(&self) -> RwLockReadGuard<'_, Inner<T, C>> {
        // A panicking action poisons the lock; the interior is plain data,
        // so recover and keep serving.
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner<T, C>> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T, C> Inner<T, C> {
    // Runs with the write lock held by the caller.
    fn handle_error(&mut self, ctx: &C, payload: &mut T, original: &dyn std::error::Error) {
        if let Some(handler) = &self.error_handler {
            debug!("invoking error handler");
            if let Err(err) = handler(ctx, payload) {
                error!(
                    error = %err,
                    original_error = %original,
                    "error handler failed"
                );
            }
        }
        if let Some(error_state) = &self.error_state {
            self.current = error_state.clone();
        }
    }
}
