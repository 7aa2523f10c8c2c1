//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`] one press at a
//! time; holding a key relies on the terminal's own auto-repeat.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, should_quit};
