use crate::piece::Piece;
use crate::types::Cell;

/// Read-only copy of everything a frame needs to draw.
///
/// Reuse one snapshot across frames with
/// [`GameState::snapshot_into`](crate::GameState::snapshot_into); the board
/// buffer keeps its allocation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameSnapshot {
    pub cols: u16,
    pub rows: u16,
    /// Row-major, `rows * cols` cells
    pub board: Vec<Cell>,
    pub current: Option<Piece>,
    pub next: Option<Piece>,
    pub game_over: bool,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub drop_interval_ms: u32,
}

impl GameSnapshot {
    pub fn cell(&self, x: u16, y: u16) -> Cell {
        if x >= self.cols || y >= self.rows {
            return None;
        }
        self.board[y as usize * self.cols as usize + x as usize]
    }

    pub fn playable(&self) -> bool {
        !self.game_over
    }
}
