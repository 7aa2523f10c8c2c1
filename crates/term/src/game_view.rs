//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameSnapshot, LockEvent, Piece};
use crate::fb::{CellStyle, FrameBuffer, Rgb};

const PLAYFIELD_BG: Rgb = Rgb::new(0, 0, 0);
const GRID: Rgb = Rgb::new(50, 50, 50);
const TEXT: Rgb = Rgb::new(255, 255, 255);
const FLASH: Rgb = Rgb::new(255, 215, 0);

/// Panel row of the lock flash: below SCORE/LEVEL/LINES, NEXT and its preview.
const EVENT_ROW: u16 = 9 + 1 + 4 + 1;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// A lightweight terminal renderer for the game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    /// Render the snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is resized to the
    /// viewport and blanked first.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);

        let (start_x, start_y, frame_w, frame_h) = self.frame_rect(snap, viewport);

        self.draw_border(fb, start_x, start_y, frame_w, frame_h);

        // Locked cells, or a faint grid dot where empty.
        for y in 0..snap.rows {
            for x in 0..snap.cols {
                match snap.cell(x, y) {
                    Some(color) => self.draw_block(fb, start_x + 1, start_y + 1, x, y, color),
                    None => {
                        let style = CellStyle::fg(GRID).on(PLAYFIELD_BG).dim();
                        self.fill_cell(fb, start_x + 1, start_y + 1, x, y, '·', style);
                    }
                }
            }
        }

        if let Some(piece) = snap.current.as_ref() {
            self.draw_piece(fb, start_x + 1, start_y + 1, piece, snap.cols, snap.rows);
        }

        self.draw_side_panel(fb, snap, viewport, start_x + frame_w + 2, start_y);

        if !snap.playable() {
            self.draw_game_over(fb, start_x, start_y, frame_w, frame_h);
        }
    }

    /// Flash the result of the last lock under the side panel.
    ///
    /// Draws nothing for locks that cleared no line and promoted no level.
    pub fn draw_lock_event(
        &self,
        snap: &GameSnapshot,
        event: &LockEvent,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        let (start_x, start_y, frame_w, _) = self.frame_rect(snap, viewport);
        let panel_x = start_x + frame_w + 2;
        if panel_x.saturating_add(10) > viewport.width {
            return;
        }

        let style = CellStyle::fg(FLASH).bold();
        let mut y = start_y + EVENT_ROW;
        if event.lines_cleared > 0 {
            fb.put_char(panel_x, y, '+', style);
            fb.put_u32(panel_x + 1, y, event.lines_cleared, style);
            let label = if event.lines_cleared == 1 { " LINE" } else { " LINES" };
            let digits = digit_count(event.lines_cleared);
            fb.put_str(panel_x + 1 + digits, y, label, style);
            y += 1;
        }
        if event.level_up {
            fb.put_str(panel_x, y, "LEVEL UP", style);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Border origin and size, centred in the viewport.
    fn frame_rect(&self, snap: &GameSnapshot, viewport: Viewport) -> (u16, u16, u16, u16) {
        let frame_w = snap.cols * self.cell_w + 2;
        let frame_h = snap.rows * self.cell_h + 2;
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;
        (start_x, start_y, frame_w, frame_h)
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        let style = CellStyle::fg(Rgb::new(200, 200, 200));

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    /// Draw a piece's in-bounds cells relative to an origin.
    fn draw_piece(
        &self,
        fb: &mut FrameBuffer,
        origin_x: u16,
        origin_y: u16,
        piece: &Piece,
        cols: u16,
        rows: u16,
    ) {
        for (x, y) in piece.cells() {
            if x >= 0 && y >= 0 && x < cols as i32 && y < rows as i32 {
                self.draw_block(fb, origin_x, origin_y, x as u16, y as u16, piece.color);
            }
        }
    }

    fn draw_block(
        &self,
        fb: &mut FrameBuffer,
        origin_x: u16,
        origin_y: u16,
        x: u16,
        y: u16,
        color: Rgb,
    ) {
        let style = CellStyle::fg(color).on(PLAYFIELD_BG).bold();
        self.fill_cell(fb, origin_x, origin_y, x, y, '█', style);
    }

    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        origin_x: u16,
        origin_y: u16,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = origin_x + cell_x * self.cell_w;
        let py = origin_y + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        panel_x: u16,
        start_y: u16,
    ) {
        if panel_x.saturating_add(10) > viewport.width {
            return;
        }

        let label = CellStyle::fg(TEXT).bold();
        let value = CellStyle::fg(Rgb::new(200, 200, 200));

        let mut y = start_y;
        for (name, v) in [
            ("SCORE", snap.score),
            ("LEVEL", snap.level),
            ("LINES", snap.lines),
        ] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y + 1, v, value);
            y += 3;
        }

        fb.put_str(panel_x, y, "NEXT", label);
        y += 1;
        if let Some(next) = snap.next.as_ref() {
            // Drawn as a free-standing shape, not at its board anchor.
            let preview = Piece { x: 0, y: 0, ..*next };
            self.draw_piece(fb, panel_x, y, &preview, 4, 4);
        }
    }

    fn draw_game_over(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, w: u16, h: u16) {
        let style = CellStyle::fg(TEXT).bold();
        let mid_y = start_y + h / 2;
        for (dy, text) in [(0, "GAME OVER"), (1, "R to restart")] {
            let text_w = text.chars().count() as u16;
            let x = start_x + w.saturating_sub(text_w) / 2;
            fb.put_str(x, mid_y + dy, text, style);
        }
    }
}

fn digit_count(mut n: u32) -> u16 {
    let mut digits = 1;
    while n >= 10 {
        n /= 10;
        digits += 1;
    }
    digits
}
