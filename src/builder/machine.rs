//! Builder for constructing state machines.

use crate::core::{Event, State, StateDefinition, TransitionTable};
use crate::machine::{Config, FsmError, StateMachine, Validation};

/// Builder for constructing state machines with a fluent API.
///
/// # Example
///
/// ```rust
/// use rewind_fsm::builder::StateMachineBuilder;
///
/// let mut machine = StateMachineBuilder::<String, String>::new()
///     .transition("idle", "start", "running")
///     .transition("running", "stop", "idle")
///     .initial("idle")
///     .eager()
///     .build()
///     .unwrap();
///
/// machine.trigger("start").unwrap();
/// assert_eq!(machine.current_state(), "running");
/// ```
pub struct StateMachineBuilder<S: State, E: Event> {
    states: TransitionTable<S, E>,
    initial: Option<S>,
    validation: Validation,
    history_limit: Option<usize>,
}

impl<S: State, E: Event> StateMachineBuilder<S, E> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            states: TransitionTable::new(),
            initial: None,
            validation: Validation::default(),
            history_limit: None,
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: impl Into<S>) -> Self {
        self.initial = Some(state.into());
        self
    }

    /// Declare a state, without transitions if it is not yet known.
    pub fn state(mut self, state: impl Into<S>) -> Self {
        self.states.define(state);
        self
    }

    /// Declare a state with a full definition, replacing any earlier one.
    pub fn define(mut self, state: impl Into<S>, definition: StateDefinition<S, E>) -> Self {
        self.states.insert(state, definition);
        self
    }

    /// Add a transition. The source state is declared if needed; the
    /// target must be declared separately unless it is also a source.
    pub fn transition(
        mut self,
        from: impl Into<S>,
        event: impl Into<E>,
        to: impl Into<S>,
    ) -> Self {
        self.states.define(from).add_transition(event, to);
        self
    }

    /// Choose when transition targets are validated.
    pub fn validation(mut self, validation: Validation) -> Self {
        self.validation = validation;
        self
    }

    /// Validate every transition target at build time.
    pub fn eager(self) -> Self {
        self.validation(Validation::Eager)
    }

    /// Keep at most `limit` history entries.
    pub fn history_limit(mut self, limit: usize) -> Self {
        self.history_limit = Some(limit);
        self
    }

    /// Produce the configuration without constructing a machine.
    /// Returns an error if the initial state is missing. An initial state
    /// outside the table is reported by [`StateMachine::new`].
    pub fn into_config(self) -> Result<Config<S, E>, FsmError> {
        let initial = self.initial.ok_or_else(|| {
            FsmError::Configuration(
                "initial state not specified. Call .initial(state) before .build()".to_string(),
            )
        })?;

        Ok(Config {
            states: self.states,
            initial,
            validation: self.validation,
            history_limit: self.history_limit,
        })
    }

    /// Build the state machine.
    pub fn build(self) -> Result<StateMachine<S, E>, FsmError> {
        StateMachine::new(self.into_config()?)
    }
}

impl<S: State, E: Event> Default for StateMachineBuilder<S, E> {
    fn default() -> Self {
        Self::new()
    }
}
