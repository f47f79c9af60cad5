//! Terminal input module.
//!
//! Maps `crossterm` key events onto [`crate::types::GameAction`]. It holds no state: key
//! repeat comes from the terminal, and every mapped press becomes exactly one action.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, should_quit};
