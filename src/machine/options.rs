//! Machine construction options.

/// Options applied at machine construction.
///
/// None of these affect transition semantics. Diagnostic-stream options
/// (level, format, destination) belong to the tracing subscriber; see
/// [`telemetry`](crate::telemetry).
///
/// # Example
///
/// ```rust
/// use trellis::{Machine, MachineOptions};
///
/// let machine: Machine<()> =
///     Machine::with_options("idle", MachineOptions::new().max_states(8));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MachineOptions {
    max_states: usize,
}

impl MachineOptions {
    /// Default options: unlimited states.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cap the number of registrable states (0 = unlimited).
    pub fn max_states(mut self, max: usize) -> Self {
        self.max_states = max;
        self
    }

    pub(crate) fn state_capacity(&self) -> usize {
        self.max_states
    }
}
