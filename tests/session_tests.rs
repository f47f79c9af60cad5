//! Session state machine tests: scoring, levels, game over, pause and restart.

use blockfall::core::{FixedSequence, GameSession, LevelUpPolicy, LockEvent, Outcome, Rules};
use blockfall::types::{Command, GameAction, PieceKind, SessionState};

fn session_of(kind: PieceKind, rules: Rules) -> GameSession<FixedSequence> {
    GameSession::with_rules(rules, FixedSequence::repeat(kind)).unwrap()
}

/// Rows `from..20` full except column 0.
fn leave_left_well(game: &mut GameSession<FixedSequence>, from: i8) {
    for y in from..20 {
        game.board_mut().fill_row_except(y, &[0], PieceKind::Z);
    }
}

/// Stand the I piece up, push it to the left wall and drop it.
fn drop_vertical_i_left(game: &mut GameSession<FixedSequence>) -> LockEvent {
    assert_eq!(game.command(Command::Rotate), Outcome::Moved);
    for _ in 0..5 {
        assert_eq!(game.command(Command::MoveLeft), Outcome::Moved);
    }
    game.command(Command::HardDrop)
        .lock_event()
        .expect("hard drop locks")
}

#[test]
fn test_new_session_is_running_with_a_piece() {
    let game = GameSession::new(7);
    assert_eq!(game.state(), SessionState::Running);
    assert_eq!(game.score(), 0);
    assert_eq!(game.level(), 1);
    assert_eq!(game.step_delay_ms(), 500);
    let active = game.active().expect("piece spawned");
    assert_eq!((active.x, active.y), (5, 0));
}

#[test]
fn test_single_line_scores_100() {
    let mut game = session_of(PieceKind::I, Rules::default());
    leave_left_well(&mut game, 19);

    let event = drop_vertical_i_left(&mut game);
    assert_eq!(event.lines_cleared, 1);
    assert_eq!(event.points, 100);
    assert_eq!(game.score(), 100);
    // Three blocks of the I remain, dropped one row.
    assert_eq!(game.board().occupied_count(), 3);
    assert_eq!(game.board().get(0, 19), Some(Some(PieceKind::I)));
}

#[test]
fn test_two_lines_score_400() {
    let mut game = session_of(PieceKind::I, Rules::default());
    leave_left_well(&mut game, 18);

    let event = drop_vertical_i_left(&mut game);
    assert_eq!(event.lines_cleared, 2);
    assert_eq!(event.points, 400);
    assert!(!event.leveled_up);
    assert_eq!(game.score(), 400);
    assert_eq!(game.lines(), 2);
    assert_eq!(game.board().get(0, 18), Some(Some(PieceKind::I)));
    assert_eq!(game.board().get(0, 19), Some(Some(PieceKind::I)));
    assert_eq!(game.board().occupied_count(), 2);
}

#[test]
fn test_three_lines_score_700() {
    let mut game = session_of(PieceKind::I, Rules::default());
    leave_left_well(&mut game, 17);

    let event = drop_vertical_i_left(&mut game);
    assert_eq!(event.lines_cleared, 3);
    assert_eq!(game.score(), 700);
    assert_eq!(game.level(), 1);
}

#[test]
fn test_four_lines_level_up_resets_score_and_board() {
    let mut game = session_of(PieceKind::I, Rules::default());
    game.board_mut().set(9, 15, Some(PieceKind::T));
    leave_left_well(&mut game, 16);

    let event = drop_vertical_i_left(&mut game);
    assert_eq!(event.lines_cleared, 4);
    assert_eq!(event.points, 1000);
    assert!(event.leveled_up);
    assert!(!event.game_over);

    assert_eq!(game.level(), 2);
    assert_eq!(game.score(), 0);
    assert_eq!(game.step_delay_ms(), 475);
    assert_eq!(game.board().occupied_count(), 0);
    assert_eq!(game.state(), SessionState::Running);
    assert!(game.active().is_some());
}

#[test]
fn test_accumulate_keeps_score_and_board() {
    let rules = Rules {
        level_up: LevelUpPolicy::Accumulate,
        ..Rules::default()
    };
    let mut game = session_of(PieceKind::I, rules);
    leave_left_well(&mut game, 16);
    drop_vertical_i_left(&mut game);
    assert_eq!(game.score(), 1000);
    assert_eq!(game.level(), 2);
    assert_eq!(game.step_delay_ms(), 475);

    game.board_mut().set(9, 19, Some(PieceKind::S));
    leave_left_well(&mut game, 18);
    let event = drop_vertical_i_left(&mut game);
    assert_eq!(event.points, 400);
    assert!(!event.leveled_up);
    assert_eq!(game.score(), 1400);
    assert_eq!(game.level(), 2);
    assert!(game.board().occupied_count() > 0);
}

#[test]
fn test_start_level_sets_initial_speed() {
    let rules = Rules {
        start_level: 3,
        ..Rules::default()
    };
    let game = session_of(PieceKind::T, rules);
    assert_eq!(game.level(), 3);
    assert_eq!(game.step_delay_ms(), 451);
}

#[test]
fn test_invalid_rules_are_rejected() {
    let rules = Rules {
        width: 3,
        ..Rules::default()
    };
    assert!(GameSession::with_rules(rules, FixedSequence::repeat(PieceKind::O)).is_err());
}

#[test]
fn test_blocked_spawn_ends_the_game() {
    let mut game = session_of(PieceKind::O, Rules::default());
    // Prop the piece up so it locks at the spawn row.
    game.board_mut().set(5, 2, Some(PieceKind::J));

    let event = game
        .command(Command::HardDrop)
        .lock_event()
        .expect("locks in place");
    assert!(event.game_over);
    assert_eq!(game.state(), SessionState::GameOver);
    assert!(game.active().is_none());

    assert_eq!(game.step(), Outcome::Ignored);
    assert_eq!(game.command(Command::MoveLeft), Outcome::Ignored);
    assert!(!game.apply_action(GameAction::Pause));
    assert_eq!(game.state(), SessionState::GameOver);
}

#[test]
fn test_stacking_tops_out() {
    let mut game = session_of(PieceKind::O, Rules::default());
    let mut drops = 0;
    while game.is_running() {
        game.command(Command::HardDrop);
        drops += 1;
        assert!(drops <= 10);
    }
    assert_eq!(drops, 10);
    assert_eq!(game.pieces_locked(), 10);
}

#[test]
fn test_restart_from_game_over() {
    let mut game = session_of(PieceKind::O, Rules::default());
    while game.is_running() {
        game.command(Command::HardDrop);
    }
    let episode = game.episode_id();

    assert!(game.apply_action(GameAction::Restart));
    assert_eq!(game.state(), SessionState::Running);
    assert_eq!(game.score(), 0);
    assert_eq!(game.lines(), 0);
    assert_eq!(game.board().occupied_count(), 0);
    assert_eq!(game.episode_id(), episode + 1);
    assert!(game.active().is_some());
}

#[test]
fn test_restart_is_idempotent_on_visible_state() {
    let mut game = session_of(PieceKind::T, Rules::default());
    game.command(Command::HardDrop);
    game.restart();
    let first = game.snapshot();
    game.restart();
    let second = game.snapshot();

    assert_eq!(first.board, second.board);
    assert_eq!(first.active, second.active);
    assert_eq!(first.score, second.score);
    assert_eq!(first.level, second.level);
    assert_eq!(first.step_delay_ms, second.step_delay_ms);
}

#[test]
fn test_restart_keeps_level_and_its_speed() {
    let mut game = session_of(PieceKind::I, Rules::default());
    leave_left_well(&mut game, 16);
    drop_vertical_i_left(&mut game);
    assert_eq!(game.level(), 2);

    game.restart();
    assert_eq!(game.level(), 2);
    assert_eq!(game.step_delay_ms(), 475);
}

#[test]
fn test_pause_freezes_everything() {
    let mut game = GameSession::new(99);
    assert!(game.apply_action(GameAction::Pause));
    assert!(game.is_paused());
    let frozen = game.snapshot();

    assert_eq!(game.step(), Outcome::Ignored);
    for command in [
        Command::MoveLeft,
        Command::MoveRight,
        Command::Rotate,
        Command::SoftDrop,
        Command::HardDrop,
    ] {
        assert_eq!(game.command(command), Outcome::Ignored);
    }
    let mut after = game.snapshot();
    assert_eq!(after, frozen);

    assert!(game.apply_action(GameAction::Pause));
    assert!(game.is_running());
    assert_eq!(game.step(), Outcome::Moved);
    after = game.snapshot();
    assert_eq!(after.active.unwrap().y, 1);
}

#[test]
fn test_wall_blocks_moves() {
    let mut game = session_of(PieceKind::O, Rules::default());
    for _ in 0..5 {
        assert_eq!(game.command(Command::MoveLeft), Outcome::Moved);
    }
    assert_eq!(game.command(Command::MoveLeft), Outcome::Rejected);
    assert_eq!(game.active().unwrap().x, 0);
}

#[test]
fn test_soft_drop_on_floor_locks() {
    let mut game = session_of(PieceKind::O, Rules::default());
    for _ in 0..18 {
        assert_eq!(game.command(Command::SoftDrop), Outcome::Moved);
    }
    let outcome = game.command(Command::SoftDrop);
    assert!(matches!(outcome, Outcome::Locked(_)));
    assert_eq!(game.take_last_event(), outcome.lock_event());
    assert_eq!(game.take_last_event(), None);
}

#[test]
fn test_same_seed_same_game() {
    let mut a = GameSession::new(2024);
    let mut b = GameSession::new(2024);
    for _ in 0..30 {
        a.command(Command::HardDrop);
        b.command(Command::HardDrop);
        a.step();
        b.step();
    }
    assert_eq!(a.snapshot(), b.snapshot());
}

#[test]
fn test_spawn_fails_when_top_rows_are_full() {
    let mut game = GameSession::new(3);
    game.board_mut().fill_row_except(0, &[], PieceKind::T);
    game.board_mut().fill_row_except(1, &[], PieceKind::T);

    assert!(!game.spawn_piece());
    assert_eq!(game.state(), SessionState::GameOver);
    assert!(game.active().is_none());

    game.restart();
    assert_eq!(game.state(), SessionState::Running);
    assert_eq!(game.board().occupied_count(), 0);
    assert_eq!(game.level(), 1);
}

#[test]
fn test_pause_and_resume_is_invisible() {
    let mut paused = GameSession::new(77);
    let mut straight = GameSession::new(77);

    paused.pause();
    paused.command(Command::MoveLeft);
    paused.command(Command::HardDrop);
    paused.step();
    assert!(paused.resume());

    for _ in 0..12 {
        paused.step();
        straight.step();
        paused.command(Command::Rotate);
        straight.command(Command::Rotate);
    }
    assert_eq!(paused.snapshot(), straight.snapshot());
}
