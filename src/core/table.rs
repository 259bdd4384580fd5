//! Declarative transition tables.
//!
//! A [`TransitionTable`] maps every state to a [`StateDefinition`], which in
//! turn maps the events accepted in that state to their target state. The
//! serialized form mirrors the in-memory shape:
//!
//! ```json
//! {
//!     "idle":    { "transitions": { "start": "running" } },
//!     "running": { "transitions": { "stop": "idle" } }
//! }
//! ```

use super::state::{Event, State};
use crate::machine::FsmError;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

/// Transitions reachable from a single state.
///
/// # Example
///
/// ```rust
/// use rewind_fsm::core::StateDefinition;
///
/// let idle: StateDefinition<String, String> = StateDefinition::new()
///     .on("start", "running")
///     .on("configure", "setup");
///
/// assert_eq!(idle.target("start"), Some(&"running".to_string()));
/// assert!(idle.handles("configure"));
/// assert!(!idle.handles("stop"));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateDefinition<S: State, E: Event> {
    #[serde(default)]
    transitions: HashMap<E, S>,
}

impl<S: State, E: Event> Default for StateDefinition<S, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, E: Event> StateDefinition<S, E> {
    /// Create a definition with no outgoing transitions.
    pub fn new() -> Self {
        Self {
            transitions: HashMap::new(),
        }
    }

    /// Add a transition, consuming and returning the definition.
    pub fn on(mut self, event: impl Into<E>, target: impl Into<S>) -> Self {
        self.add_transition(event, target);
        self
    }

    /// Add a transition, returning the target it replaced (if any).
    pub fn add_transition(&mut self, event: impl Into<E>, target: impl Into<S>) -> Option<S> {
        self.transitions.insert(event.into(), target.into())
    }

    /// Target state for `event`, if this state accepts it.
    pub fn target<Q>(&self, event: &Q) -> Option<&S>
    where
        E: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.transitions.get(event)
    }

    /// Whether this state has a transition for `event`.
    pub fn handles<Q>(&self, event: &Q) -> bool
    where
        E: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.transitions.contains_key(event)
    }

    /// Events accepted in this state (unordered).
    pub fn events(&self) -> impl Iterator<Item = &E> {
        self.transitions.keys()
    }

    /// Raw event-to-target mapping.
    pub fn transitions(&self) -> &HashMap<E, S> {
        &self.transitions
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}

/// Mapping from every known state to its outgoing transitions.
///
/// Key iteration order is unspecified; callers that need a stable order must
/// sort the results themselves.
///
/// # Example
///
/// ```rust
/// use rewind_fsm::core::{StateDefinition, TransitionTable};
///
/// let mut table: TransitionTable<String, String> = TransitionTable::new();
/// table.insert("idle", StateDefinition::new().on("start", "running"));
/// table.insert("running", StateDefinition::new().on("stop", "idle"));
///
/// assert_eq!(table.len(), 2);
/// assert_eq!(table.states_with_event("start"), vec![&"idle".to_string()]);
/// assert!(table.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "", transparent)]
pub struct TransitionTable<S: State, E: Event> {
    states: HashMap<S, StateDefinition<S, E>>,
}

impl<S: State, E: Event> Default for TransitionTable<S, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, E: Event> TransitionTable<S, E> {
    pub fn new() -> Self {
        Self {
            states: HashMap::new(),
        }
    }

    /// Insert a state definition, returning the one it replaced (if any).
    pub fn insert(
        &mut self,
        state: impl Into<S>,
        definition: StateDefinition<S, E>,
    ) -> Option<StateDefinition<S, E>> {
        self.states.insert(state.into(), definition)
    }

    /// Definition for `state`, creating an empty one when it is not yet known.
    pub fn define(&mut self, state: impl Into<S>) -> &mut StateDefinition<S, E> {
        self.states.entry(state.into()).or_default()
    }

    pub fn contains<Q>(&self, state: &Q) -> bool
    where
        S: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.states.contains_key(state)
    }

    pub fn get<Q>(&self, state: &Q) -> Option<&StateDefinition<S, E>>
    where
        S: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.states.get(state)
    }

    /// The table's own copy of `state`, if present.
    pub fn key<Q>(&self, state: &Q) -> Option<&S>
    where
        S: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.states.get_key_value(state).map(|(key, _)| key)
    }

    /// Every state in the table.
    pub fn states(&self) -> Vec<&S> {
        self.states.keys().collect()
    }

    /// States whose definition has a transition for `event`.
    pub fn states_with_event<Q>(&self, event: &Q) -> Vec<&S>
    where
        E: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.states
            .iter()
            .filter(|(_, definition)| definition.handles(event))
            .map(|(state, _)| state)
            .collect()
    }

    /// Events accepted in `state`; empty if the state is unknown.
    pub fn events_from<Q>(&self, state: &Q) -> Vec<&E>
    where
        S: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.states
            .get(state)
            .map(|definition| definition.events().collect())
            .unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&S, &StateDefinition<S, E>)> {
        self.states.iter()
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Check that every transition target is itself a state of the table.
    ///
    /// Reports the first dangling transition found. Without this pass a bad
    /// target only surfaces when that transition is taken.
    pub fn validate(&self) -> Result<(), FsmError> {
        for (from, definition) in &self.states {
            for (event, to) in definition.transitions() {
                if !self.states.contains_key(to) {
                    return Err(FsmError::DanglingTransition {
                        from: from.name().to_string(),
                        event: event.name().to_string(),
                        to: to.name().to_string(),
                    });
                }
            }
        }
        Ok(())
    }
}

impl<S: State, E: Event, K: Into<S>> FromIterator<(K, StateDefinition<S, E>)>
    for TransitionTable<S, E>
{
    fn from_iter<I: IntoIterator<Item = (K, StateDefinition<S, E>)>>(iter: I) -> Self {
        Self {
            states: iter
                .into_iter()
                .map(|(state, definition)| (state.into(), definition))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Table = TransitionTable<String, String>;

    fn on_off() -> Table {
        [
            ("idle", StateDefinition::new().on("start", "running")),
            ("running", StateDefinition::new().on("stop", "idle")),
        ]
        .into_iter()
        .collect()
    }

    fn sorted<'a>(mut states: Vec<&'a String>) -> Vec<&'a str> {
        states.sort();
        states.into_iter().map(String::as_str).collect()
    }

    #[test]
    fn states_lists_every_key() {
        assert_eq!(sorted(on_off().states()), vec!["idle", "running"]);
    }

    #[test]
    fn states_with_event_filters_by_transition() {
        let table = on_off();
        assert_eq!(sorted(table.states_with_event("start")), vec!["idle"]);
        assert_eq!(sorted(table.states_with_event("stop")), vec!["running"]);
        assert!(table.states_with_event("pause").is_empty());
    }

    #[test]
    fn events_from_unknown_state_is_empty() {
        let table = on_off();
        assert_eq!(table.events_from("idle"), vec![&"start".to_string()]);
        assert!(table.events_from("missing").is_empty());
    }

    #[test]
    fn define_creates_missing_state() {
        let mut table = Table::new();
        table.define("idle").add_transition("start", "running");
        table.define("idle").add_transition("skip", "done");

        assert_eq!(table.len(), 1);
        assert_eq!(table.get("idle").unwrap().transitions().len(), 2);
    }

    #[test]
    fn validate_accepts_closed_table() {
        assert!(on_off().validate().is_ok());
    }

    #[test]
    fn validate_reports_dangling_target() {
        let mut table = on_off();
        table.define("running").add_transition("crash", "broken");

        let err = table.validate().unwrap_err();
        assert_eq!(
            err,
            FsmError::DanglingTransition {
                from: "running".into(),
                event: "crash".into(),
                to: "broken".into(),
            }
        );
    }

    #[test]
    fn table_deserializes_from_map_shape() {
        let json = r#"{
            "idle": { "transitions": { "start": "running" } },
            "running": { "transitions": { "stop": "idle" } },
            "done": {}
        }"#;

        let table: Table = serde_json::from_str(json).unwrap();
        assert_eq!(table.len(), 3);
        assert!(table.get("done").unwrap().is_empty());
        assert_eq!(
            table.get("idle").unwrap().target("start"),
            Some(&"running".to_string())
        );
    }

    #[test]
    fn table_serializes_transparently() {
        let json = serde_json::to_value(on_off()).unwrap();
        assert_eq!(json["idle"]["transitions"]["start"], "running");
    }
}
