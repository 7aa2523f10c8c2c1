//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Board Dimensions
//!
//! The playfield is sized the way the classic windowed version was: a fixed
//! pixel height divided by a fixed block size gives the row count.
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: `600 / 30` = 20 rows (indexed 0-19, row 0 at the top)
//!
//! # Game Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAME_MS` | 33 | Fixed update interval (~30 updates per second) |
//! | `INITIAL_DROP_MS` | 500 | Gravity period at level 1 |
//! | `DROP_STEP_MS` | 50 | Gravity speed-up per level |
//! | `MIN_DROP_MS` | 100 | Gravity never gets faster than this |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Rgb, DEFAULT_COLS, DEFAULT_ROWS};
//!
//! let cyan = Rgb::new(0, 255, 255);
//! assert_eq!(cyan.g, 255);
//!
//! assert_eq!(DEFAULT_COLS, 10);
//! assert_eq!(DEFAULT_ROWS, 20);
//! ```

/// Window height the board is derived from, in pixels
pub const WINDOW_HEIGHT_PX: u32 = 600;

/// Size of one board cell, in pixels
pub const BLOCK_SIZE_PX: u32 = 30;

/// Board width in cells (10 columns)
pub const DEFAULT_COLS: u16 = 10;

/// Board height in cells (20 rows)
pub const DEFAULT_ROWS: u16 = (WINDOW_HEIGHT_PX / BLOCK_SIZE_PX) as u16;

/// Largest supported shape bounding box (rows and columns)
pub const MAX_SHAPE_DIM: usize = 4;

/// Fixed update interval of the frame loop (milliseconds)
pub const FRAME_MS: u32 = 33;

/// Gravity timing (milliseconds)
pub const INITIAL_DROP_MS: u32 = 500;
pub const DROP_STEP_MS: u32 = 50;
pub const MIN_DROP_MS: u32 = 100;

/// Lines needed per level
pub const LINES_PER_LEVEL: u32 = 10;

/// Points per cleared line, multiplied by the level
pub const SCORE_PER_LINE: u32 = 100;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Cell on the board (None = empty, Some = filled with the color of the piece that locked there)
pub type Cell = Option<Rgb>;

/// Game actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    SoftDrop,
    HardDrop,
    Rotate,
    Restart,
}
