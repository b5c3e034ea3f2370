//! Integration tests - whole game scenarios through the public facade

use crossterm::event::{KeyCode, KeyEvent};

use blockfall::core::{ActivePiece, Board, DropOutcome, GameSession};
use blockfall::input::action_for_phase;
use blockfall::types::{Cell, GameAction, Phase, PieceKind, COLUMNS, DROP_INTERVAL_MS, EMPTY, ROWS};

fn rows_with(filled: &[usize], gaps: &[usize]) -> [[Cell; COLUMNS]; ROWS] {
    let mut rows = [[EMPTY; COLUMNS]; ROWS];
    for &y in filled {
        for x in 0..COLUMNS {
            if !gaps.contains(&x) {
                rows[y][x] = PieceKind::Z.id();
            }
        }
    }
    rows
}

#[test]
fn test_game_lifecycle() {
    let mut state = GameSession::new(12345);
    assert_eq!(state.phase(), Phase::Ready);

    assert!(state.apply_action(GameAction::Start));
    assert_eq!(state.phase(), Phase::Running);

    assert!(state.apply_action(GameAction::TogglePause));
    assert_eq!(state.phase(), Phase::Paused);

    assert!(state.apply_action(GameAction::TogglePause));
    assert_eq!(state.phase(), Phase::Running);
}

#[test]
fn test_piece_falls_to_floor_and_merges() {
    let mut state = GameSession::new(7).with_active(ActivePiece::at(PieceKind::I, 5, 0));
    state.start();

    for step in 1..=19 {
        assert_eq!(state.drop(), DropOutcome::Moved, "drop {}", step);
    }
    assert_eq!(state.active().y, 19);

    assert_eq!(state.drop(), DropOutcome::Merged { lines_cleared: 0 });
    assert_eq!(&state.board().row(19)[5..9], &[5, 5, 5, 5]);
    assert_eq!(state.active().y, 0);
    assert_eq!(state.phase(), Phase::Running);
}

#[test]
fn test_gravity_moves_piece_after_interval() {
    let mut state = GameSession::new(7);
    state.start();
    let y0 = state.active().y;

    for _ in 0..(DROP_INTERVAL_MS / 16) {
        state.tick(16);
    }
    assert_eq!(state.active().y, y0);

    // 62 * 16 = 992; one more frame passes the interval.
    state.tick(16);
    assert_eq!(state.active().y, y0 + 1);
}

#[test]
fn test_scripted_clears_accumulate_score() {
    let mut state = GameSession::new(11)
        .with_board(Board::from_rows(&rows_with(&[19], &[0, 1, 2, 3])))
        .with_active(ActivePiece::at(PieceKind::I, 0, 18));
    state.start();
    state.take_last_event();

    // Single.
    assert_eq!(state.drop(), DropOutcome::Moved);
    assert_eq!(state.drop(), DropOutcome::Merged { lines_cleared: 1 });
    assert_eq!(state.score(), 40);
    assert_eq!(state.take_last_event().map(|e| e.line_clear_score), Some(40));

    // Double.
    let mut state = state
        .with_board(Board::from_rows(&rows_with(&[18, 19], &[0, 1])))
        .with_active(ActivePiece::at(PieceKind::O, 0, 18));
    assert_eq!(state.drop(), DropOutcome::Merged { lines_cleared: 2 });
    assert_eq!(state.score(), 140);

    // Four rows with a vertical I.
    let mut vertical = ActivePiece::at(PieceKind::I, 0, 16);
    vertical.matrix = vertical.matrix.rotate_cw();
    let mut state = state
        .with_board(Board::from_rows(&rows_with(&[16, 17, 18, 19], &[0])))
        .with_active(vertical);
    assert_eq!(state.drop(), DropOutcome::Merged { lines_cleared: 4 });

    assert_eq!(state.score(), 1340);
    assert_eq!(state.lines(), 7);
    let ev = state.take_last_event().unwrap();
    assert!(ev.merged);
    assert_eq!(ev.lines_cleared, 4);
    assert_eq!(ev.line_clear_score, 1200);
    assert_eq!(ev.score, 1340);
    assert!(state.board().cells().iter().all(|&c| c == EMPTY));
}

#[test]
fn test_scripted_board_with_more_than_four_full_rows() {
    let mut rows = rows_with(&[15, 16, 17, 18, 19], &[]);
    rows[14] = rows_with(&[14], &[0, 1])[14];

    let mut state = GameSession::new(13)
        .with_board(Board::from_rows(&rows))
        .with_active(ActivePiece::at(PieceKind::O, 0, 12));
    state.start();

    assert_eq!(state.drop(), DropOutcome::Moved);
    assert_eq!(state.drop(), DropOutcome::Merged { lines_cleared: 6 });
    assert_eq!(state.score(), 1200);
    assert_eq!(state.lines(), 6);
    // The O's upper row was the only thing left above the cleared block.
    assert_eq!(&state.board().row(19)[..3], &[1, 1, 0]);
}

#[test]
fn test_blocked_spawn_ends_game_and_restart_recovers() {
    // Every spawn template overlaps columns 4..=7 of the top row.
    let mut rows = [[EMPTY; COLUMNS]; ROWS];
    for cell in &mut rows[0][4..=7] {
        *cell = PieceKind::J.id();
    }

    let mut state = GameSession::new(5)
        .with_board(Board::from_rows(&rows))
        .with_active(ActivePiece::at(PieceKind::O, 0, 18));
    state.start();

    assert_eq!(state.drop(), DropOutcome::ToppedOut { lines_cleared: 0 });
    assert_eq!(state.phase(), Phase::GameOver);

    // Everything but restart is ignored.
    let before = *state.active();
    assert!(!state.apply_action(GameAction::MoveLeft));
    assert!(!state.apply_action(GameAction::Rotate));
    assert!(!state.apply_action(GameAction::SoftDrop));
    assert!(!state.apply_action(GameAction::TogglePause));
    assert!(!state.apply_action(GameAction::Start));
    assert!(!state.tick(5_000));
    assert_eq!(*state.active(), before);

    assert!(state.apply_action(GameAction::Restart));
    assert_eq!(state.phase(), Phase::Running);
    assert_eq!(state.score(), 0);
    assert_eq!(state.lines(), 0);
    assert!(state.board().cells().iter().all(|&c| c == EMPTY));

    let ev = state.take_last_event().unwrap();
    assert!(!ev.merged);
    assert_eq!(ev.score, 0);
}

#[test]
fn test_enter_key_restarts_after_game_over() {
    let mut rows = [[EMPTY; COLUMNS]; ROWS];
    for cell in &mut rows[0][4..=7] {
        *cell = PieceKind::T.id();
    }
    let mut state = GameSession::new(8)
        .with_board(Board::from_rows(&rows))
        .with_active(ActivePiece::at(PieceKind::O, 0, 18));
    state.start();
    state.drop();
    assert_eq!(state.phase(), Phase::GameOver);

    let enter = KeyEvent::from(KeyCode::Enter);
    let action = action_for_phase(enter, state.phase()).unwrap();
    assert!(state.apply_action(action));
    assert_eq!(state.phase(), Phase::Running);

    // While running Enter is a plain start, which does nothing.
    let action = action_for_phase(enter, state.phase()).unwrap();
    assert!(!state.apply_action(action));
}

#[test]
fn test_pause_keeps_piece_and_timer() {
    let mut state = GameSession::new(3);
    state.start();
    state.tick(400);
    state.toggle_pause();

    let piece = *state.active();
    assert!(!state.move_piece(1));
    assert!(!state.rotate());
    assert!(!state.tick(DROP_INTERVAL_MS * 10));
    assert_eq!(*state.active(), piece);
    assert_eq!(state.drop_timer_ms(), 400);

    let snap = state.snapshot();
    assert_eq!(snap.phase, Phase::Paused);
    assert!(!snap.phase.accepts_piece_input());
    assert_eq!(snap.timers.drop_ms, 400);
}

#[test]
fn test_walls_stop_horizontal_moves() {
    let mut state = GameSession::new(1).with_active(ActivePiece::at(PieceKind::O, 5, 4));
    state.start();

    let mut moves = 0;
    while state.move_piece(-1) {
        moves += 1;
    }
    assert_eq!(moves, 5);
    assert_eq!(state.active().x, 0);

    while state.move_piece(1) {}
    assert_eq!(state.active().x, COLUMNS as i8 - 2);
}

#[test]
fn test_same_seed_same_game() {
    let script = [
        GameAction::Start,
        GameAction::MoveLeft,
        GameAction::Rotate,
        GameAction::SoftDrop,
        GameAction::MoveRight,
    ];

    let mut a = GameSession::new(424242);
    let mut b = GameSession::new(424242);
    for _ in 0..40 {
        for &action in &script {
            a.apply_action(action);
            b.apply_action(action);
        }
        a.tick(300);
        b.tick(300);
    }
    assert_eq!(a.snapshot(), b.snapshot());
}
