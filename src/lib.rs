//! Rewind: a table-driven finite state machine with undo/redo history
//!
//! A machine is described by a declarative transition table: every state
//! lists the events it accepts and the state each event leads to. The
//! machine tracks its current state, applies event-driven or direct
//! transitions, and keeps a linear timeline of visited states that can be
//! walked backwards and forwards.
//!
//! # Core Concepts
//!
//! - **State / Event**: identifier traits, implemented for `String` and for
//!   enums declared with [`state_enum!`] / [`event_enum!`]
//! - **Transition table**: `state -> { event -> target }`, read-only once the
//!   machine is built
//! - **History**: entering a new state after an undo discards the redo branch
//!
//! Invalid input fails loudly with [`FsmError`]; running out of history is
//! an ordinary outcome reported as `false` by `undo` and `redo`.
//!
//! # Example
//!
//! ```rust
//! use rewind_fsm::builder::StateMachineBuilder;
//! use rewind_fsm::{event_enum, state_enum};
//!
//! state_enum! {
//!     enum Player {
//!         Stopped,
//!         Playing,
//!         Paused,
//!     }
//! }
//!
//! event_enum! {
//!     enum Control {
//!         Play,
//!         Pause,
//!         Stop,
//!     }
//! }
//!
//! let mut player = StateMachineBuilder::<Player, Control>::new()
//!     .transition(Player::Stopped, Control::Play, Player::Playing)
//!     .transition(Player::Playing, Control::Pause, Player::Paused)
//!     .transition(Player::Playing, Control::Stop, Player::Stopped)
//!     .transition(Player::Paused, Control::Play, Player::Playing)
//!     .initial(Player::Stopped)
//!     .eager()
//!     .build()
//!     .unwrap();
//!
//! player.trigger(&Control::Play).unwrap();
//! player.trigger(&Control::Pause).unwrap();
//! assert_eq!(player.current_state(), &Player::Paused);
//!
//! assert!(player.undo());
//! assert_eq!(player.current_state(), &Player::Playing);
//! ```

pub mod builder;
pub mod core;
pub mod machine;

// Re-export commonly used types
pub use crate::builder::StateMachineBuilder;
pub use crate::core::{Event, State, StateDefinition, StateHistory, TransitionTable};
pub use crate::machine::{Config, FsmError, StateMachine, Validation};
