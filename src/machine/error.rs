//! Errors raised by the state machine.

use thiserror::Error;

/// Errors that can occur when building or driving a state machine.
///
/// All of these are caller mistakes: a failed operation leaves the machine
/// exactly as it was, and retrying the same call fails the same way.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FsmError {
    /// No usable configuration was supplied.
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    /// The requested state is not a key of the transition table.
    #[error("State '{state}' is not present in the transition table")]
    InvalidState { state: String },

    /// The current state has no transition for the triggered event.
    #[error("Event '{event}' is not present in the transitions of state '{from}'")]
    UnknownEvent { event: String, from: String },

    /// A transition targets a state missing from the table.
    #[error("Transition '{from}' --{event}--> '{to}' targets an unknown state")]
    DanglingTransition {
        from: String,
        event: String,
        to: String,
    },
}
