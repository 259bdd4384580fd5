//! The table-driven state machine.
//!
//! A [`StateMachine`] owns a read-only [`TransitionTable`], its current state,
//! and a [`StateHistory`] timeline. Every operation runs to completion before
//! returning; the machine is meant to be driven by one owner at a time.

mod config;
mod error;

pub use config::{Config, Validation};
pub use error::FsmError;

use crate::core::{Event, State, StateHistory, TransitionTable};
use std::borrow::Borrow;
use std::hash::Hash;
use std::sync::Arc;
use uuid::Uuid;

/// Finite state machine with linear undo/redo history.
///
/// # Example
///
/// ```rust
/// use rewind_fsm::machine::StateMachine;
///
/// let mut machine = StateMachine::<String, String>::from_json(
///     r#"{
///         "states": {
///             "idle": { "transitions": { "start": "running" } },
///             "running": { "transitions": { "stop": "idle" } }
///         },
///         "initial": "idle"
///     }"#,
/// )
/// .unwrap();
///
/// machine.trigger("start").unwrap();
/// assert_eq!(machine.current_state(), "running");
///
/// assert!(machine.undo());
/// assert_eq!(machine.current_state(), "idle");
/// assert!(machine.redo());
/// assert_eq!(machine.current_state(), "running");
/// ```
#[derive(Clone, Debug)]
pub struct StateMachine<S: State, E: Event> {
    id: Uuid,
    table: Arc<TransitionTable<S, E>>,
    initial: S,
    current: S,
    history: StateHistory<S>,
}

impl<S: State, E: Event> StateMachine<S, E> {
    /// Construct a machine from a configuration.
    ///
    /// The machine starts in `config.initial` with a single history entry.
    /// Fails with [`FsmError::InvalidState`] if the initial state is not in
    /// the table, and with the eager validation error if enabled.
    pub fn new(config: Config<S, E>) -> Result<Self, FsmError> {
        config.check()?;
        let history = match config.history_limit {
            Some(limit) => StateHistory::with_limit(limit),
            None => StateHistory::new(),
        };
        Self::assemble(Arc::new(config.states), config.initial, history)
    }

    /// Construct a machine from a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, FsmError> {
        Self::new(Config::from_json(json)?)
    }

    /// Construct a machine over a table shared with other machines.
    ///
    /// Uses lazy validation and unbounded history.
    pub fn with_table(
        table: Arc<TransitionTable<S, E>>,
        initial: impl Into<S>,
    ) -> Result<Self, FsmError> {
        Self::assemble(table, initial.into(), StateHistory::new())
    }

    fn assemble(
        table: Arc<TransitionTable<S, E>>,
        initial: S,
        mut history: StateHistory<S>,
    ) -> Result<Self, FsmError> {
        history.clear();
        let mut machine = Self {
            id: Uuid::new_v4(),
            table,
            current: initial.clone(),
            initial,
            history,
        };
        let initial = machine.initial.clone();
        machine.change_state(&initial)?;
        tracing::debug!(
            machine = %machine.id,
            initial = machine.initial.name(),
            states = machine.table.len(),
            "state machine created"
        );
        Ok(machine)
    }

    /// Unique identifier of this instance, used in log fields.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Get current state (pure)
    pub fn current_state(&self) -> &S {
        &self.current
    }

    /// Get the state the machine started in (pure)
    pub fn initial_state(&self) -> &S {
        &self.initial
    }

    /// Get the transition table (pure)
    pub fn table(&self) -> &TransitionTable<S, E> {
        &self.table
    }

    /// Get state history (pure)
    pub fn history(&self) -> &StateHistory<S> {
        &self.history
    }

    /// Move to `state` regardless of the current state's transitions.
    ///
    /// Discards any redo entries and records `state` as a new history entry.
    /// Fails with [`FsmError::InvalidState`] if `state` is not in the table,
    /// leaving the machine untouched.
    pub fn change_state<Q>(&mut self, state: &Q) -> Result<(), FsmError>
    where
        S: Borrow<Q>,
        Q: Hash + Eq + ToOwned<Owned = S> + ?Sized,
    {
        let Some(target) = self.table.key(state).cloned() else {
            let state = state.to_owned();
            tracing::debug!(
                machine = %self.id,
                state = state.name(),
                "rejected change to unknown state"
            );
            return Err(FsmError::InvalidState {
                state: state.name().to_string(),
            });
        };
        self.enter(target);
        Ok(())
    }

    /// Fire `event` from the current state.
    ///
    /// Only the current state's own transitions are consulted. Fails with
    /// [`FsmError::UnknownEvent`] when it has none for `event`.
    pub fn trigger<Q>(&mut self, event: &Q) -> Result<(), FsmError>
    where
        E: Borrow<Q>,
        Q: Hash + Eq + ToOwned<Owned = E> + ?Sized,
    {
        let target = self
            .table
            .get(&self.current)
            .and_then(|definition| definition.target(event))
            .cloned();

        let Some(target) = target else {
            let event = event.to_owned();
            tracing::debug!(
                machine = %self.id,
                event = event.name(),
                from = self.current.name(),
                "rejected unknown event"
            );
            return Err(FsmError::UnknownEvent {
                event: event.name().to_string(),
                from: self.current.name().to_string(),
            });
        };

        tracing::debug!(
            machine = %self.id,
            from = self.current.name(),
            to = target.name(),
            "event triggered"
        );
        self.change_state(&target)
    }

    /// Return to the initial state as a new, undoable history entry.
    pub fn reset(&mut self) {
        // The initial state was accepted by the table at construction.
        let initial = self.initial.clone();
        self.enter(initial);
    }

    /// States of the table; with an event, only those that accept it.
    pub fn states(&self, event: Option<&E>) -> Vec<&S> {
        match event {
            Some(event) => self.states_with_event(event),
            None => self.all_states(),
        }
    }

    /// Every state of the table (unordered).
    pub fn all_states(&self) -> Vec<&S> {
        self.table.states()
    }

    /// States whose transitions include `event` (unordered).
    ///
    /// Accepts borrowed forms, so string machines can pass `&str`.
    pub fn states_with_event<Q>(&self, event: &Q) -> Vec<&S>
    where
        E: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.table.states_with_event(event)
    }

    /// Events the current state accepts (unordered).
    pub fn available_events(&self) -> Vec<&E> {
        self.table.events_from(&self.current)
    }

    /// Whether `event` would be accepted from the current state.
    pub fn can_trigger<Q>(&self, event: &Q) -> bool
    where
        E: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.table
            .get(&self.current)
            .is_some_and(|definition| definition.handles(event))
    }

    /// Step back to the previous state. Returns `false` if there is none.
    pub fn undo(&mut self) -> bool {
        let Some(state) = self.history.undo() else {
            return false;
        };
        tracing::trace!(machine = %self.id, to = state.name(), "undo");
        self.current = state.clone();
        true
    }

    /// Step forward to the next state. Returns `false` if there is none.
    pub fn redo(&mut self) -> bool {
        let Some(state) = self.history.redo() else {
            return false;
        };
        tracing::trace!(machine = %self.id, to = state.name(), "redo");
        self.current = state.clone();
        true
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Forget all history, keeping the current state as the only entry.
    ///
    /// Unlike [`StateHistory::clear`], this does not leave the timeline empty
    /// with the cursor before the start: the current state is re-recorded so
    /// the cursor keeps pointing at it. The next change can therefore be
    /// undone back to the state held when the history was cleared.
    pub fn clear_history(&mut self) {
        self.history.clear();
        self.history.record(self.current.clone());
        tracing::debug!(machine = %self.id, "history cleared");
    }

    /// Record `state` as current. The caller guarantees it is in the table.
    fn enter(&mut self, state: S) {
        tracing::debug!(
            machine = %self.id,
            from = self.current.name(),
            to = state.name(),
            "state changed"
        );
        self.current = self.history.record(state).clone();
    }
}
