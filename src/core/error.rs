//! Interpreter error types.

use thiserror::Error;

/// Errors raised while processing a single event.
///
/// Every variant is fatal for the event being processed: the interpreter
/// discards any partially folded updates and outputs and leaves its committed
/// state pair untouched. Nothing is caught or retried internally; the caller
/// decides whether to retry the event, skip it, or abort its own flow.
#[derive(Debug, Error)]
pub enum InterpreterError {
    /// A named action descriptor carried an empty identifier.
    #[error("Action descriptor carries an empty identifier")]
    InvalidActionShape,

    /// A named action descriptor's identifier is not registered in the
    /// configured factory map.
    #[error("No action factory registered for '{name}'")]
    UnresolvedActionFactory {
        /// The identifier that failed to resolve.
        name: String,
    },
}
