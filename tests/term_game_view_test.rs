use blockfall::core::{GameSession, GameSnapshot};
use blockfall::term::{GameView, Rgb, Viewport};
use blockfall::types::{PieceKind, SessionState};

fn contains_text(fb: &blockfall::term::FrameBuffer, needle: &str) -> bool {
    (0..fb.height()).any(|y| fb.row_text(y).contains(needle))
}

#[test]
fn term_view_renders_border_corners() {
    let snap = GameSession::new(1).snapshot();
    let view = GameView::default();

    // 10 cells * 2 columns + border = 22 wide, 20 rows + border = 22 tall.
    let fb = view.render(&snap, Viewport::new(22, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_landed_cell_two_columns_wide_in_its_color() {
    let mut snap = GameSnapshot::default();
    snap.board[19 * 10] = Some(PieceKind::L);

    let fb = GameView::default().render(&snap, Viewport::new(22, 22));

    let left = fb.get(1, 20).unwrap();
    let right = fb.get(2, 20).unwrap();
    assert_eq!(left.ch, '█');
    assert_eq!(right.ch, '█');
    assert_eq!(left.style.fg, Rgb::from(PieceKind::L.color()));
    assert_ne!(fb.get(3, 20).unwrap().ch, '█');
}

#[test]
fn term_view_draws_active_piece() {
    let snap = GameSession::new(5).snapshot();
    let active = snap.active.expect("active piece");
    let fb = GameView::default().render(&snap, Viewport::new(22, 22));

    for (x, y) in active.cells {
        let cell = fb.get(1 + x as u16 * 2, 1 + y as u16).unwrap();
        assert_eq!(cell.ch, '█');
        assert_eq!(cell.style.fg, Rgb::from(active.color()));
    }
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut snap = GameSnapshot::default();
    snap.score = 1234;
    snap.level = 2;
    snap.lines = 10;
    snap.step_delay_ms = 475;

    let fb = GameView::default().render(&snap, Viewport::new(60, 24));

    assert!(contains_text(&fb, "SCORE"));
    assert!(contains_text(&fb, "1234"));
    assert!(contains_text(&fb, "LEVEL"));
    assert!(contains_text(&fb, "LINES"));
    assert!(contains_text(&fb, "SPEED"));
    assert!(contains_text(&fb, "475"));
}

#[test]
fn term_view_overlays_pause_and_game_over() {
    let mut snap = GameSnapshot::default();
    let view = GameView::default();

    snap.state = SessionState::Paused;
    let fb = view.render(&snap, Viewport::new(22, 22));
    assert!(contains_text(&fb, "PAUSED"));

    snap.state = SessionState::GameOver;
    let fb = view.render(&snap, Viewport::new(22, 22));
    assert!(contains_text(&fb, "GAME OVER"));
    assert!(!contains_text(&fb, "PAUSED"));
}

#[test]
fn term_view_adapts_to_custom_board_size() {
    let mut snap = GameSnapshot::default();
    snap.width = 12;
    snap.height = 8;
    snap.board = vec![None; 12 * 8];

    let fb = GameView::default().render(&snap, Viewport::new(26, 10));
    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(25, 9).unwrap().ch, '┘');
}
