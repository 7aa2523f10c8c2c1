//! Game state module - manages the complete game state
//!
//! This module ties together all core components: board, pieces, piece source, and scoring.
//! It handles gravity timing, piece movement, rotation, locking, line clears, and the
//! game-over/reset lifecycle.
//!
//! Once the game is over every mutating command is ignored until [`GameState::reset`].

use crate::board::Board;
use crate::config::GameConfig;
use crate::error::ConfigError;
use crate::piece::Piece;
use crate::rng::{PieceSource, RandomPieces};
use crate::scoring::{line_clear_score, next_drop_interval, reaches_next_level};
use crate::snapshot::GameSnapshot;
use crate::types::GameAction;

/// Result of a translation attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The piece moved
    Moved,
    /// The move collided and nothing changed
    Blocked,
    /// A downward move collided, so the piece locked in place
    Locked,
}

/// What the last lock did (consumed by observers)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub lines_cleared: u32,
    pub score_gained: u32,
    pub level_up: bool,
    pub game_over: bool,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<S = RandomPieces> {
    config: GameConfig,
    board: Board,
    current: Piece,
    next: Piece,
    source: S,
    /// Last lock/line-clear event (consumed by observers).
    last_event: Option<LockEvent>,
    score: u32,
    level: u32,
    lines: u32,
    drop_interval_ms: u32,
    /// Clock reading of the last gravity step, as passed to `tick`.
    last_drop_ms: u64,
    game_over: bool,
}

impl GameState<RandomPieces> {
    /// Create a new game with uniformly random pieces from the given seed
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_source(config, RandomPieces::seeded(seed))
    }
}

impl Default for GameState<RandomPieces> {
    fn default() -> Self {
        Self::build(GameConfig::default(), RandomPieces::seeded(1))
    }
}

impl<S: PieceSource> GameState<S> {
    /// Create a new game drawing pieces from `source`
    pub fn with_source(config: GameConfig, source: S) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, source))
    }

    /// Callers guarantee `config` is valid.
    fn build(config: GameConfig, mut source: S) -> Self {
        let board = Board::new(config.cols, config.rows);
        let current = draw_piece(&config, &mut source);
        let next = draw_piece(&config, &mut source);
        let drop_interval_ms = config.initial_drop_ms;

        let mut state = Self {
            config,
            board,
            current,
            next,
            source,
            last_event: None,
            score: 0,
            level: 1,
            lines: 0,
            drop_interval_ms,
            last_drop_ms: 0,
            game_over: false,
        };
        state.check_spawn();
        state
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current(&self) -> &Piece {
        &self.current
    }

    pub fn next(&self) -> &Piece {
        &self.next
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn drop_interval_ms(&self) -> u32 {
        self.drop_interval_ms
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Take and clear the last lock/line-clear event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Copy the drawable state into `out`, reusing its board buffer.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.cols = self.board.width();
        out.rows = self.board.height();
        out.board.clear();
        out.board.extend_from_slice(self.board.cells());
        out.current = Some(self.current);
        out.next = Some(self.next);
        out.game_over = self.game_over;
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
        out.drop_interval_ms = self.drop_interval_ms;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Whether the active piece would collide after an offset of (dx, dy)
    pub fn collides(&self, dx: i32, dy: i32) -> bool {
        self.board.collides(&self.current, dx, dy)
    }

    /// Try to move the active piece.
    ///
    /// A blocked straight-down move locks the piece instead of being rejected.
    pub fn try_move(&mut self, dx: i32, dy: i32) -> MoveOutcome {
        if self.game_over {
            return MoveOutcome::Blocked;
        }

        if !self.collides(dx, dy) {
            self.current.x += dx;
            self.current.y += dy;
            return MoveOutcome::Moved;
        }

        if dy > 0 && dx == 0 {
            self.freeze();
            return MoveOutcome::Locked;
        }

        MoveOutcome::Blocked
    }

    /// Rotate the active piece clockwise in place, or leave it untouched if the
    /// rotated shape would collide at the same anchor.
    pub fn try_rotate(&mut self) -> bool {
        if self.game_over {
            return false;
        }

        let original = self.current.shape;
        self.current.rotate();
        if self.collides(0, 0) {
            self.current.shape = original;
            return false;
        }
        true
    }

    /// Drop the active piece to the lowest legal row and lock it.
    ///
    /// Returns the number of rows the piece fell.
    pub fn hard_drop(&mut self) -> u32 {
        if self.game_over {
            return 0;
        }

        let mut dropped = 0;
        while !self.collides(0, 1) {
            self.current.y += 1;
            dropped += 1;
        }
        self.freeze();
        dropped
    }

    /// Gravity clock. Steps the piece down once when more than the drop
    /// interval has passed since the last step.
    ///
    /// Returns true if a gravity step ran.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if self.game_over {
            return false;
        }

        if now_ms.saturating_sub(self.last_drop_ms) > self.drop_interval_ms as u64 {
            self.try_move(0, 1);
            self.last_drop_ms = now_ms;
            return true;
        }
        false
    }

    /// Start over: empty board, fresh pieces, counters and speed back to
    /// their initial values. The gravity clock reading is kept.
    pub fn reset(&mut self) {
        self.board.clear();
        self.current = draw_piece(&self.config, &mut self.source);
        self.next = draw_piece(&self.config, &mut self.source);
        self.last_event = None;
        self.score = 0;
        self.level = 1;
        self.lines = 0;
        self.drop_interval_ms = self.config.initial_drop_ms;
        self.game_over = false;
        self.check_spawn();
    }

    /// Apply a game action. Returns true if the state changed.
    ///
    /// `Restart` only resets a finished game.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.try_move(-1, 0) != MoveOutcome::Blocked,
            GameAction::MoveRight => self.try_move(1, 0) != MoveOutcome::Blocked,
            GameAction::SoftDrop => self.try_move(0, 1) != MoveOutcome::Blocked,
            GameAction::Rotate => self.try_rotate(),
            GameAction::HardDrop => {
                if self.game_over {
                    return false;
                }
                self.hard_drop();
                true
            }
            GameAction::Restart => {
                if !self.game_over {
                    return false;
                }
                self.reset();
                true
            }
        }
    }

    /// Lock the active piece, clear lines, and bring in the next piece
    fn freeze(&mut self) {
        self.board.lock(&self.current);

        let level_before = self.level;
        let score_before = self.score;
        let lines_cleared = self.clear_lines();

        self.current = self.next;
        self.next = draw_piece(&self.config, &mut self.source);
        self.check_spawn();

        self.last_event = Some(LockEvent {
            lines_cleared,
            score_gained: self.score - score_before,
            level_up: self.level > level_before,
            game_over: self.game_over,
        });
    }

    /// Remove full rows and update lines, score, level and speed.
    ///
    /// Score uses the level from before this clear; the level check runs on
    /// every lock and promotes at most one level.
    fn clear_lines(&mut self) -> u32 {
        let cleared = self.board.clear_full_rows() as u32;
        self.lines += cleared;
        self.score = self.score.saturating_add(line_clear_score(
            cleared,
            self.level,
            self.config.score_per_line,
        ));

        if reaches_next_level(self.lines, self.level, self.config.lines_per_level) {
            self.level += 1;
            self.drop_interval_ms = next_drop_interval(
                self.drop_interval_ms,
                self.config.drop_step_ms,
                self.config.min_drop_ms,
            );
        }

        cleared
    }

    /// A freshly spawned piece that already overlaps something ends the game
    fn check_spawn(&mut self) {
        if self.collides(0, 0) {
            self.game_over = true;
        }
    }
}

fn draw_piece<S: PieceSource>(config: &GameConfig, source: &mut S) -> Piece {
    let templates = config.catalog.templates();
    let idx = source.next_index(templates.len()) % templates.len();
    Piece::spawn(&templates[idx], config.cols)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::PieceKind;
    use crate::rng::ScriptedPieces;
    use crate::types::{Cell, Rgb};

    const GRAY: Cell = Some(Rgb::new(50, 50, 50));

    fn scripted(kinds: &[PieceKind]) -> GameState<ScriptedPieces> {
        scripted_with(GameConfig::default(), kinds)
    }

    fn scripted_with(config: GameConfig, kinds: &[PieceKind]) -> GameState<ScriptedPieces> {
        let script = kinds.iter().map(|k| k.index()).collect();
        GameState::with_source(config, ScriptedPieces::new(script)).unwrap()
    }

    /// Fill row `y` everywhere except the listed columns
    fn fill_row_except(state: &mut GameState<ScriptedPieces>, y: i32, gaps: &[i32]) {
        for x in 0..state.board.width() as i32 {
            if !gaps.contains(&x) {
                state.board.set(x, y, GRAY);
            }
        }
    }

    fn vertical_i(x: i32) -> Piece {
        Piece {
            shape: PieceKind::I.shape().rotated(),
            color: PieceKind::I.color(),
            x,
            y: 0,
        }
    }

    #[test]
    fn test_new_game_state() {
        let state = GameState::new(GameConfig::default(), 12345).unwrap();

        assert!(!state.game_over);
        assert_eq!(state.score, 0);
        assert_eq!(state.level, 1);
        assert_eq!(state.lines, 0);
        assert_eq!(state.drop_interval_ms, 500);
        assert_eq!(state.board.filled_count(), 0);
        assert_eq!(state.current.y, 0);
        assert!(state.last_event.is_none());
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = GameConfig::default().with_board(0, 20);
        assert!(matches!(
            GameState::new(config, 1),
            Err(ConfigError::EmptyBoard { .. })
        ));
    }

    #[test]
    fn test_pieces_drawn_in_order() {
        let state = scripted(&[PieceKind::O, PieceKind::T]);
        assert_eq!(state.current.shape, PieceKind::O.shape());
        assert_eq!(state.next.shape, PieceKind::T.shape());
    }

    #[test]
    fn test_try_move() {
        let mut state = scripted(&[PieceKind::T]);
        let initial_x = state.current.x;

        assert_eq!(state.try_move(1, 0), MoveOutcome::Moved);
        assert_eq!(state.current.x, initial_x + 1);

        assert_eq!(state.try_move(-1, 0), MoveOutcome::Moved);
        assert_eq!(state.current.x, initial_x);

        assert_eq!(state.try_move(0, 1), MoveOutcome::Moved);
        assert_eq!(state.current.y, 1);
    }

    #[test]
    fn test_try_move_wall_is_noop() {
        let mut state = scripted(&[PieceKind::O]);

        // O spawns at x=4; four moves reach the wall
        let mut moved = 0;
        for _ in 0..10 {
            if state.try_move(-1, 0) == MoveOutcome::Moved {
                moved += 1;
            }
        }
        assert_eq!(moved, 4);
        assert_eq!(state.current.x, 0);
        assert_eq!(state.board.filled_count(), 0);
    }

    #[test]
    fn test_blocked_soft_drop_locks() {
        let mut state = scripted(&[PieceKind::O, PieceKind::T]);
        state.current.y = 18;

        assert_eq!(state.try_move(0, 1), MoveOutcome::Locked);
        assert!(state.board.is_occupied(4, 18));
        assert!(state.board.is_occupied(5, 19));
        assert_eq!(state.current.shape, PieceKind::T.shape());
        assert_eq!(state.current.y, 0);
    }

    #[test]
    fn test_blocked_diagonal_does_not_lock() {
        let mut state = scripted(&[PieceKind::O]);
        state.current.y = 18;

        assert_eq!(state.try_move(1, 1), MoveOutcome::Blocked);
        assert_eq!(state.board.filled_count(), 0);
        assert_eq!(state.current.y, 18);
    }

    #[test]
    fn test_try_rotate() {
        let mut state = scripted(&[PieceKind::T]);
        let (x, y) = (state.current.x, state.current.y);

        assert!(state.try_rotate());
        assert_eq!(state.current.shape, PieceKind::T.shape().rotated());
        assert_eq!((state.current.x, state.current.y), (x, y));
    }

    #[test]
    fn test_rotate_rejected_at_wall() {
        let mut state = scripted(&[PieceKind::T]);
        state.current = vertical_i(9);
        let before = state.current;

        // Horizontal I at x=9 would stick out of the right wall
        assert!(!state.try_rotate());
        assert_eq!(state.current, before);
    }

    #[test]
    fn test_rotate_rejected_by_filled_cell() {
        let mut state = scripted(&[PieceKind::T]);
        state.current = vertical_i(2);
        state.current.y = 5;
        state.board.set(3, 5, GRAY);
        let board_before = state.board.clone();
        let before = state.current;

        assert!(!state.try_rotate());
        assert_eq!(state.current, before);
        assert_eq!(state.board, board_before);
    }

    #[test]
    fn test_hard_drop_o_lands_on_floor() {
        let mut state = scripted(&[PieceKind::O]);

        assert_eq!(state.hard_drop(), 18);
        for (x, y) in [(4, 18), (5, 18), (4, 19), (5, 19)] {
            assert!(state.board.is_occupied(x, y), "({}, {})", x, y);
        }
        assert_eq!(state.board.filled_count(), 4);
        assert_eq!(state.board.get(4, 19), Some(Some(PieceKind::O.color())));
    }

    #[test]
    fn test_two_line_clear_scores_200() {
        let mut state = scripted(&[PieceKind::O]);
        fill_row_except(&mut state, 18, &[4, 5]);
        fill_row_except(&mut state, 19, &[4, 5]);

        state.hard_drop();

        assert_eq!(state.lines, 2);
        assert_eq!(state.score, 200);
        assert_eq!(state.level, 1);
        assert_eq!(state.board.filled_count(), 0);
        assert_eq!(
            state.take_last_event(),
            Some(LockEvent {
                lines_cleared: 2,
                score_gained: 200,
                level_up: false,
                game_over: false,
            })
        );
        assert!(state.take_last_event().is_none());
    }

    #[test]
    fn test_level_up_from_eight_to_eleven_lines() {
        let mut state = scripted(&[PieceKind::O]);
        state.lines = 8;
        for y in 17..20 {
            fill_row_except(&mut state, y, &[0]);
        }
        state.current = vertical_i(0);

        assert_eq!(state.hard_drop(), 16);

        assert_eq!(state.lines, 11);
        // Scored at the pre-level-up level
        assert_eq!(state.score, 300);
        assert_eq!(state.level, 2);
        assert_eq!(state.drop_interval_ms, 450);
        // The top cell of the I survives, shifted down to the floor
        assert_eq!(state.board.filled_count(), 1);
        assert!(state.board.is_occupied(0, 19));
    }

    #[test]
    fn test_level_up_is_one_step_per_lock() {
        let config = GameConfig {
            lines_per_level: 1,
            ..GameConfig::default()
        };
        let mut state = scripted_with(config, &[PieceKind::O]);
        for y in 17..20 {
            fill_row_except(&mut state, y, &[0]);
        }
        state.current = vertical_i(0);

        state.hard_drop();
        assert_eq!(state.lines, 3);
        assert_eq!(state.level, 2);
        assert_eq!(state.drop_interval_ms, 450);

        // A lock with no clears still runs the threshold check
        state.hard_drop();
        assert_eq!(state.lines, 3);
        assert_eq!(state.level, 3);
        assert_eq!(state.drop_interval_ms, 400);
    }

    #[test]
    fn test_drop_interval_floor() {
        let mut state = scripted(&[PieceKind::O]);
        state.level = 9;
        state.lines = 89;
        state.drop_interval_ms = 100;
        fill_row_except(&mut state, 19, &[4, 5]);

        state.hard_drop();
        assert_eq!(state.level, 10);
        assert_eq!(state.drop_interval_ms, 100);
        assert_eq!(state.score, 900);
    }

    #[test]
    fn test_topping_out_ends_game() {
        let mut state = scripted(&[PieceKind::O]);
        for y in 2..20 {
            state.board.set(4, y, GRAY);
        }

        // O stops on the column right away and the next O has no room
        assert_eq!(state.hard_drop(), 0);
        assert!(state.game_over);
        assert!(state.take_last_event().unwrap().game_over);
    }

    #[test]
    fn test_game_over_ignores_commands() {
        let mut state = scripted(&[PieceKind::O]);
        for y in 2..20 {
            state.board.set(4, y, GRAY);
        }
        state.hard_drop();
        assert!(state.game_over);

        let board = state.board.clone();
        let current = state.current;

        assert_eq!(state.try_move(-1, 0), MoveOutcome::Blocked);
        assert_eq!(state.try_move(0, 1), MoveOutcome::Blocked);
        assert!(!state.try_rotate());
        assert_eq!(state.hard_drop(), 0);
        assert!(!state.tick(10_000));
        assert!(!state.apply_action(GameAction::HardDrop));

        assert_eq!(state.board, board);
        assert_eq!(state.current, current);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_reset_after_game_over() {
        let mut state = scripted(&[PieceKind::O]);
        state.score = 1200;
        state.level = 3;
        state.lines = 25;
        state.drop_interval_ms = 400;
        for y in 2..20 {
            state.board.set(4, y, GRAY);
        }
        state.hard_drop();
        assert!(state.game_over);

        assert!(state.apply_action(GameAction::Restart));

        assert!(!state.game_over);
        assert_eq!(state.score, 0);
        assert_eq!(state.level, 1);
        assert_eq!(state.lines, 0);
        assert_eq!(state.drop_interval_ms, 500);
        assert_eq!(state.board.filled_count(), 0);
        assert_eq!((state.current.x, state.current.y), (4, 0));
    }

    #[test]
    fn test_restart_action_ignored_while_playing() {
        let mut state = scripted(&[PieceKind::O]);
        state.score = 100;
        assert!(!state.apply_action(GameAction::Restart));
        assert_eq!(state.score, 100);

        // reset() itself is unconditional
        state.reset();
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_tick_gravity() {
        let mut state = scripted(&[PieceKind::T]);

        assert!(!state.tick(100));
        assert!(!state.tick(500));
        assert_eq!(state.current.y, 0);

        assert!(state.tick(501));
        assert_eq!(state.current.y, 1);
        assert_eq!(state.last_drop_ms, 501);

        assert!(!state.tick(1001));
        assert!(state.tick(1002));
        assert_eq!(state.current.y, 2);
    }

    #[test]
    fn test_tick_locks_on_floor() {
        let mut state = scripted(&[PieceKind::O]);
        state.current.y = 18;

        assert!(state.tick(501));
        assert_eq!(state.board.filled_count(), 4);
        assert!(state.take_last_event().is_some());
    }

    #[test]
    fn test_spawn_collision_at_construction() {
        let config = GameConfig::default().with_board(10, 1);
        let state = scripted_with(config, &[PieceKind::T]);
        assert!(state.game_over);
    }

    #[test]
    fn test_snapshot_mirrors_state() {
        let mut state = scripted(&[PieceKind::O, PieceKind::I]);
        state.hard_drop();

        let snap = state.snapshot();
        assert_eq!((snap.cols, snap.rows), (10, 20));
        assert_eq!(snap.board.len(), 200);
        assert_eq!(snap.cell(4, 19), Some(PieceKind::O.color()));
        assert_eq!(snap.current, Some(state.current));
        assert_eq!(snap.next, Some(state.next));
        assert_eq!(snap.level, 1);
        assert!(snap.playable());
    }
}
