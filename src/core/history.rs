//! Linear undo/redo history of visited states.
//!
//! The history is a timeline of entries plus a cursor. Undo and redo only
//! move the cursor; recording a new state after an undo discards every entry
//! past the cursor before appending, the usual editor-style behavior.

use super::state::State;
use chrono::{DateTime, Utc};
use std::collections::VecDeque;
use std::time::Duration;

/// A state on the timeline and when it was entered.
#[derive(Clone, Debug, PartialEq)]
pub struct HistoryEntry<S: State> {
    /// The state that was entered
    pub state: S,
    /// When the state was entered
    pub entered_at: DateTime<Utc>,
}

/// Timeline of visited states with a movable cursor.
///
/// The cursor is `None` only while the timeline is empty, which is the
/// before-start position. Otherwise it indexes the entry holding the
/// machine's current state.
///
/// # Example
///
/// ```rust
/// use rewind_fsm::core::StateHistory;
///
/// let mut history: StateHistory<String> = StateHistory::new();
/// history.record("a".to_string());
/// history.record("b".to_string());
/// history.record("c".to_string());
///
/// assert_eq!(history.undo(), Some(&"b".to_string()));
/// assert_eq!(history.undo(), Some(&"a".to_string()));
/// assert_eq!(history.undo(), None);
///
/// // A new entry drops the redo branch.
/// history.record("d".to_string());
/// assert!(!history.can_redo());
/// assert_eq!(history.path(), vec!["a", "d"]);
/// ```
#[derive(Clone, Debug)]
pub struct StateHistory<S: State> {
    entries: VecDeque<HistoryEntry<S>>,
    cursor: Option<usize>,
    limit: Option<usize>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create an empty, unbounded history.
    pub fn new() -> Self {
        Self {
            entries: VecDeque::new(),
            cursor: None,
            limit: None,
        }
    }

    /// Create an empty history holding at most `limit` entries.
    ///
    /// Once full, recording drops the oldest entry. A limit of zero is
    /// treated as one, since the current state always occupies an entry.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(limit.clamp(1, 64)),
            cursor: None,
            limit: Some(limit.max(1)),
        }
    }

    /// Maximum number of retained entries, if bounded.
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Forget every entry and move the cursor before the start.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = None;
    }

    /// Append `state` after the cursor, discarding any redo entries.
    ///
    /// Returns a reference to the recorded state, which becomes current.
    pub fn record(&mut self, state: S) -> &S {
        let keep = self.cursor.map_or(0, |cursor| cursor + 1);
        self.entries.truncate(keep);
        self.entries.push_back(HistoryEntry {
            state,
            entered_at: Utc::now(),
        });

        if let Some(limit) = self.limit {
            while self.entries.len() > limit {
                self.entries.pop_front();
            }
        }

        let last = self.entries.len() - 1;
        self.cursor = Some(last);
        &self.entries[last].state
    }

    /// Step the cursor back one entry, returning the state it lands on.
    ///
    /// Returns `None` without moving when there is no earlier entry.
    pub fn undo(&mut self) -> Option<&S> {
        match self.cursor {
            Some(cursor) if cursor > 0 => {
                self.cursor = Some(cursor - 1);
                Some(&self.entries[cursor - 1].state)
            }
            _ => None,
        }
    }

    /// Step the cursor forward one entry, returning the state it lands on.
    ///
    /// Returns `None` without moving when there is no later entry.
    pub fn redo(&mut self) -> Option<&S> {
        let next = self.cursor.map_or(0, |cursor| cursor + 1);
        if next < self.entries.len() {
            self.cursor = Some(next);
            Some(&self.entries[next].state)
        } else {
            None
        }
    }

    pub fn can_undo(&self) -> bool {
        matches!(self.cursor, Some(cursor) if cursor > 0)
    }

    pub fn can_redo(&self) -> bool {
        self.cursor.map_or(0, |cursor| cursor + 1) < self.entries.len()
    }

    /// State under the cursor.
    pub fn current(&self) -> Option<&S> {
        self.cursor.map(|cursor| &self.entries[cursor].state)
    }

    /// Cursor index, or `None` before the start.
    pub fn position(&self) -> Option<usize> {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries, oldest first, including any redo branch.
    pub fn entries(&self) -> impl Iterator<Item = &HistoryEntry<S>> {
        self.entries.iter()
    }

    /// Names of the states on the timeline, oldest first.
    pub fn path(&self) -> Vec<&str> {
        self.entries.iter().map(|entry| entry.state.name()).collect()
    }

    /// Time between the oldest and newest entry.
    ///
    /// Returns `None` when the timeline is empty.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.entries.front()?, self.entries.back()?);
        last.entered_at
            .signed_duration_since(first.entered_at)
            .to_std()
            .ok()
    }
}
