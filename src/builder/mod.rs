//! Builder API for ergonomic state machine construction.
//!
//! This module provides a fluent builder and identifier macros for creating
//! state machines without spelling out the transition table by hand.

pub mod machine;
pub mod macros;

pub use machine::StateMachineBuilder;
