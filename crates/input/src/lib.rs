//! Terminal input adapter.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]s. Keys map the
//! same way in every phase and the engine decides what to act on; the one
//! exception is Enter, which restarts after game over (see
//! [`map::action_for_phase`]).

pub mod map;

pub use blockfall_types as types;

pub use map::{action_for_phase, handle_key_event, should_quit};
