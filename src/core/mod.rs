//! Core state machine types.
//!
//! This module contains the building blocks the machine is assembled from:
//! - Identifier traits for states and events
//! - The declarative transition table
//! - The undo/redo history timeline

mod history;
mod state;
mod table;

pub use history::{HistoryEntry, StateHistory};
pub use state::{Event, State};
pub use table::{StateDefinition, TransitionTable};
