//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **no dependencies** on rendering, input, or I/O, making it:
//!
//! - **Deterministic**: Same seed (or the same scripted piece list) replays the same game
//! - **Testable**: Unit tests for every rule
//! - **Portable**: Any shell that can draw colored cells can host it
//! - **Rate-agnostic**: Gravity depends only on the clock readings passed to `tick`
//!
//! # Module Structure
//!
//! - [`board`]: fixed-size grid with collision testing and line compaction
//! - [`config`]: validated construction-time parameters
//! - [`game_state`]: active and next piece, locking, scoring, level speed, game over
//! - [`piece`]: the movable piece value
//! - [`pieces`]: shape matrices, rotation, and the template catalog
//! - [`rng`]: where new pieces come from (seeded random or scripted)
//! - [`scoring`]: line-clear points and level progression
//!
//! # Game Rules
//!
//! - **Catalog**: I, Z, S, T, L, J, O, each with one fixed color, drawn uniformly at random
//! - **Rotation**: clockwise transpose-and-reverse, rejected outright on overlap (no kicks)
//! - **Locking**: a blocked downward move locks the piece; hard drop locks immediately
//! - **Scoring**: `100 * lines * level`, using the level before the clear
//! - **Levels**: one level per 10 lines; gravity speeds up 50ms per level, down to 100ms
//!
//! # Example
//!
//! ```
//! use blockfall_core::{GameConfig, GameState};
//! use blockfall_types::GameAction;
//!
//! let mut game = GameState::new(GameConfig::default(), 12345).unwrap();
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! game.apply_action(GameAction::HardDrop);
//!
//! assert_eq!(game.board().filled_count(), 4);
//! assert_eq!(game.score(), 0);
//! ```
//!
//! # Timing
//!
//! The core has no timers. The driver calls
//! [`GameState::tick`](game_state::GameState::tick) once per frame with the
//! current clock reading in milliseconds; a gravity step runs whenever more
//! than the drop interval has passed since the previous one.

pub mod board;
pub mod config;
pub mod error;
pub mod game_state;
pub mod piece;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use config::GameConfig;
pub use error::ConfigError;
pub use game_state::{GameState, LockEvent, MoveOutcome};
pub use piece::Piece;
pub use pieces::{Catalog, PieceKind, Shape, Template};
pub use rng::{PieceSource, RandomPieces, ScriptedPieces};
pub use scoring::{line_clear_score, next_drop_interval, reaches_next_level};
pub use snapshot::GameSnapshot;
