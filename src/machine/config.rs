//! Machine configuration.

use super::error::FsmError;
use crate::core::{Event, State, TransitionTable};
use serde::{Deserialize, Serialize};

/// When transition targets are checked against the table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Validation {
    /// Targets are checked only when a transition is taken.
    #[default]
    Lazy,

    /// Every target is checked when the machine is constructed.
    Eager,
}

/// Everything needed to construct a [`StateMachine`](super::StateMachine).
///
/// # Example
///
/// ```rust
/// use rewind_fsm::machine::{Config, Validation};
///
/// let config: Config<String, String> = Config::from_json(
///     r#"{
///         "states": {
///             "idle": { "transitions": { "start": "running" } },
///             "running": { "transitions": { "stop": "idle" } }
///         },
///         "initial": "idle",
///         "validation": "eager"
///     }"#,
/// )
/// .unwrap();
///
/// assert_eq!(config.initial, "idle");
/// assert_eq!(config.validation, Validation::Eager);
/// assert_eq!(config.history_limit, None);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Config<S: State, E: Event> {
    /// The transition table
    pub states: TransitionTable<S, E>,
    /// State the machine starts in and returns to on reset
    pub initial: S,
    /// When transition targets are validated
    #[serde(default)]
    pub validation: Validation,
    /// Maximum number of history entries kept, unbounded when `None`
    #[serde(default)]
    pub history_limit: Option<usize>,
}

impl<S: State, E: Event> Config<S, E> {
    /// Lazily validated, unbounded configuration.
    pub fn new(states: TransitionTable<S, E>, initial: impl Into<S>) -> Self {
        Self {
            states,
            initial: initial.into(),
            validation: Validation::default(),
            history_limit: None,
        }
    }

    /// Parse a configuration from JSON.
    ///
    /// An empty document, `null`, or anything that does not match the
    /// configuration shape is rejected as [`FsmError::Configuration`].
    pub fn from_json(json: &str) -> Result<Self, FsmError> {
        let config: Option<Self> = serde_json::from_str(json)
            .map_err(|e| FsmError::Configuration(format!("malformed configuration: {e}")))?;
        config.ok_or_else(|| FsmError::Configuration("no configuration supplied".to_string()))
    }

    /// Check the settings that do not depend on the validation mode.
    pub(crate) fn check(&self) -> Result<(), FsmError> {
        if self.history_limit == Some(0) {
            return Err(FsmError::Configuration(
                "history limit must be at least 1".to_string(),
            ));
        }
        if self.validation == Validation::Eager {
            self.states.validate()?;
        }
        Ok(())
    }
}
