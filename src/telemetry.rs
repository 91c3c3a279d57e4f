//! Optional installation of a diagnostic subscriber.
//!
//! The engine only emits structured [`tracing`] events (state changes,
//! transition failures, action failures) with state, event, and action
//! names as fields. Where those events go is the embedding application's
//! concern, and most applications already install their own subscriber.
//! This module is for the ones that do not: [`init`] wires up a
//! process-global subscriber from a small set of options.

use thiserror::Error;
use tracing::subscriber::SetGlobalDefaultError;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::fmt;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::EnvFilter;

/// Diagnostic stream format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per event.
    #[default]
    Json,
    /// Human-readable multi-line output.
    Pretty,
    /// Human-readable single-line output.
    Compact,
}

/// Diagnostic stream destination.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogOutput {
    #[default]
    Stdout,
    Stderr,
}

/// Options for [`init`].
///
/// `filter` uses [`EnvFilter`] syntax, e.g. `"info"` or `"trellis=debug"`.
#[derive(Clone, Debug)]
pub struct LogOptions {
    pub filter: String,
    pub format: LogFormat,
    pub output: LogOutput,
}

impl Default for LogOptions {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            format: LogFormat::default(),
            output: LogOutput::default(),
        }
    }
}

/// Errors from installing the diagnostic subscriber.
#[derive(Debug, Error)]
pub enum InitError {
    #[error("invalid log filter: {0}")]
    Filter(#[from] ParseError),

    /// A global subscriber was already installed.
    #[error("failed to install tracing subscriber: {0}")]
    Subscriber(#[from] SetGlobalDefaultError),
}

/// Install a process-global subscriber for the engine's diagnostic events.
///
/// Fails if the filter does not parse or another subscriber is already
/// installed. Never affects transition semantics either way.
pub fn init(options: &LogOptions) -> Result<(), InitError> {
    let filter = EnvFilter::try_new(&options.filter)?;
    let writer = match options.output {
        LogOutput::Stdout => BoxMakeWriter::new(std::io::stdout),
        LogOutput::Stderr => BoxMakeWriter::new(std::io::stderr),
    };

    let result = match options.format {
        LogFormat::Json => tracing::subscriber::set_global_default(
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().json().with_writer(writer)),
        ),
        LogFormat::Pretty => tracing::subscriber::set_global_default(
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().pretty().with_writer(writer)),
        ),
        LogFormat::Compact => tracing::subscriber::set_global_default(
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().compact().with_writer(writer)),
        ),
    };
    result?;
    Ok(())
}
