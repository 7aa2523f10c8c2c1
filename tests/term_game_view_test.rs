use blockfall::core::{GameConfig, GameState, PieceKind, ScriptedPieces};
use blockfall::term::{encode_diff_into, GameView, Viewport};

fn game(kinds: &[PieceKind]) -> GameState<ScriptedPieces> {
    let script = kinds.iter().map(|k| k.index()).collect();
    GameState::with_source(GameConfig::default(), ScriptedPieces::new(script)).unwrap()
}

#[test]
fn term_view_renders_border_corners() {
    let snap = game(&[PieceKind::T]).snapshot();
    let view = GameView::default();

    // With cell_w=2 and cell_h=1:
    // board pixels = 10*2 by 20*1 => 20x20
    // plus border => 22x22
    let fb = view.render(&snap, Viewport::new(22, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_locked_cell_as_two_chars_wide() {
    let mut snap = game(&[PieceKind::T]).snapshot();
    // Locked red block at bottom-left.
    snap.board[19 * 10] = Some(PieceKind::Z.color());
    snap.current = None;

    let fb = GameView::default().render(&snap, Viewport::new(22, 22));

    // Inside border: (1,1) origin. Each cell is 2 chars wide.
    let y0 = 1 + 19;
    for x in [1, 2] {
        let cell = fb.get(x, y0).unwrap();
        assert_eq!(cell.ch, '█');
        assert_eq!(cell.style.fg, PieceKind::Z.color());
    }
    assert_eq!(fb.get(3, y0).unwrap().ch, '·');
}

#[test]
fn term_view_shows_score_in_panel() {
    let mut snap = game(&[PieceKind::T]).snapshot();
    snap.score = 1200;

    let fb = GameView::default().render(&snap, Viewport::new(60, 22));
    let panel_x = 19 + 22 + 2;

    assert!(fb.row_text(0).contains("SCORE"));
    let value: String = (0..4).map(|dx| fb.get(panel_x + dx, 1).unwrap().ch).collect();
    assert_eq!(value, "1200");
}

#[test]
fn term_view_overlays_game_over() {
    let mut snap = game(&[PieceKind::T]).snapshot();
    snap.game_over = true;

    let fb = GameView::default().render(&snap, Viewport::new(22, 22));
    assert!(fb.row_text(11).contains("GAME OVER"));
    assert!(fb.row_text(12).contains("R to restart"));
}

#[test]
fn moving_a_piece_only_redraws_changed_cells() {
    let mut state = game(&[PieceKind::O]);
    let view = GameView::default();
    let vp = Viewport::new(22, 22);

    let before = view.render(&state.snapshot(), vp);
    state.try_move(-1, 0);
    let after = view.render(&state.snapshot(), vp);

    let mut none = Vec::new();
    encode_diff_into(&before, &before, &mut none).unwrap();
    let mut some = Vec::new();
    encode_diff_into(&before, &after, &mut some).unwrap();
    assert!(some.len() > none.len());
}
