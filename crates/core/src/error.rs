//! Construction-time configuration errors.
//!
//! Every operation on a constructed [`GameState`](crate::GameState) is total;
//! the only failures happen while validating a [`GameConfig`](crate::GameConfig).

use crate::types::MAX_SHAPE_DIM;

#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone, Copy)]
pub enum ConfigError {
    #[error("board must have at least one row and one column (got {cols}x{rows})")]
    EmptyBoard { cols: u16, rows: u16 },

    #[error("block size must be positive")]
    ZeroBlockSize,

    #[error("window height of {height_px}px holds no {block_px}px rows")]
    WindowTooShort { height_px: u32, block_px: u32 },

    #[error("window holds {rows} rows, more than a board can address")]
    TooManyRows { rows: u32 },

    #[error("shape catalog is empty")]
    EmptyCatalog,

    #[error("shape has no occupied cells")]
    EmptyShape,

    #[error("shape row {row} has {found} cells, expected {expected}")]
    JaggedShape {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("shape is {rows}x{cols}, larger than {max}x{max}", max = MAX_SHAPE_DIM)]
    ShapeTooLarge { rows: usize, cols: usize },

    #[error("catalog entry {index} is {width} cells wide, board has {cols} columns")]
    ShapeTooWide { index: usize, width: usize, cols: u16 },

    #[error("lines per level must be positive")]
    ZeroLinesPerLevel,

    #[error("drop interval floor {min_ms}ms must be positive and at most the initial {initial_ms}ms")]
    DropInterval { initial_ms: u32, min_ms: u32 },
}
