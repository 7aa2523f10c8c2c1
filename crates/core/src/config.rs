//! Construction-time game parameters.
//!
//! Defaults reproduce the classic windowed layout: a 600px tall window of
//! 30px blocks (20 rows), 10 columns, 500ms gravity at level 1 speeding up by
//! 50ms per level down to 100ms, a level every 10 lines, 100 points per line.

use crate::error::ConfigError;
use crate::pieces::Catalog;
use crate::types::{
    BLOCK_SIZE_PX, DEFAULT_COLS, DEFAULT_ROWS, DROP_STEP_MS, INITIAL_DROP_MS, LINES_PER_LEVEL,
    MIN_DROP_MS, SCORE_PER_LINE, WINDOW_HEIGHT_PX,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub cols: u16,
    pub rows: u16,
    pub initial_drop_ms: u32,
    pub min_drop_ms: u32,
    pub drop_step_ms: u32,
    pub lines_per_level: u32,
    pub score_per_line: u32,
    pub catalog: Catalog,
}

impl GameConfig {
    /// Board of `cols` columns whose height is `height_px / block_px` rows.
    pub fn from_window(cols: u16, height_px: u32, block_px: u32) -> Result<Self, ConfigError> {
        if block_px == 0 {
            return Err(ConfigError::ZeroBlockSize);
        }
        let rows = height_px / block_px;
        if rows == 0 {
            return Err(ConfigError::WindowTooShort {
                height_px,
                block_px,
            });
        }
        let rows = u16::try_from(rows).map_err(|_| ConfigError::TooManyRows { rows })?;
        Self {
            cols,
            rows,
            ..Self::default()
        }
        .validated()
    }

    pub fn with_board(mut self, cols: u16, rows: u16) -> Self {
        self.cols = cols;
        self.rows = rows;
        self
    }

    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Check every parameter the engine relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cols == 0 || self.rows == 0 {
            return Err(ConfigError::EmptyBoard {
                cols: self.cols,
                rows: self.rows,
            });
        }
        if self.catalog.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }
        for (index, template) in self.catalog.templates().iter().enumerate() {
            if template.shape.cols() > self.cols as usize {
                return Err(ConfigError::ShapeTooWide {
                    index,
                    width: template.shape.cols(),
                    cols: self.cols,
                });
            }
        }
        if self.lines_per_level == 0 {
            return Err(ConfigError::ZeroLinesPerLevel);
        }
        if self.min_drop_ms == 0 || self.min_drop_ms > self.initial_drop_ms {
            return Err(ConfigError::DropInterval {
                initial_ms: self.initial_drop_ms,
                min_ms: self.min_drop_ms,
            });
        }
        Ok(())
    }

    pub fn validated(self) -> Result<Self, ConfigError> {
        self.validate()?;
        Ok(self)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        debug_assert_eq!(DEFAULT_ROWS as u32, WINDOW_HEIGHT_PX / BLOCK_SIZE_PX);
        Self {
            cols: DEFAULT_COLS,
            rows: DEFAULT_ROWS,
            initial_drop_ms: INITIAL_DROP_MS,
            min_drop_ms: MIN_DROP_MS,
            drop_step_ms: DROP_STEP_MS,
            lines_per_level: LINES_PER_LEVEL,
            score_per_line: SCORE_PER_LINE,
            catalog: Catalog::standard(),
        }
    }
}
