//! Piece controller and session behavior through the public API.

use blockfall::{
    Action, GameConfig, GameOverPolicy, GameState, MoveOutcome, PieceKind, Session, Tick,
};

fn config() -> GameConfig {
    GameConfig::default()
}

fn drop_until_landed(game: &mut GameState) -> MoveOutcome {
    loop {
        match game.move_piece(0, 1) {
            MoveOutcome::Moved => continue,
            outcome => return outcome,
        }
    }
}

#[test]
fn test_same_seed_same_pieces() {
    let mut a = GameState::with_seed(&config(), 2024);
    let mut b = GameState::with_seed(&config(), 2024);
    for _ in 0..20 {
        assert_eq!(a.active().kind(), b.active().kind());
        assert_eq!(a.next_kind(), b.next_kind());
        a.spawn().unwrap();
        b.spawn().unwrap();
    }
}

#[test]
fn test_landing_spawns_the_queued_piece() {
    let mut game = GameState::with_seed(&config(), 11);
    let queued = game.next_kind();

    let outcome = drop_until_landed(&mut game);

    assert_eq!(outcome, MoveOutcome::Locked { lines_cleared: 0 });
    assert_eq!(game.active().kind(), queued);
    assert_eq!(game.active().origin().1, 0);
    let locked = game.board().rows().iter().flatten().filter(|c| c.is_some()).count();
    assert_eq!(locked, 4);
}

#[test]
fn test_sideways_block_is_a_no_op() {
    let mut game = GameState::with_seed(&config(), 5);
    while game.move_piece(-1, 0) == MoveOutcome::Moved {}
    let origin = game.active().origin();
    assert_eq!(game.move_piece(-1, 0), MoveOutcome::Blocked);
    assert_eq!(game.active().origin(), origin);
    assert!(game.active().cells().all(|(x, _)| x >= 0));
    assert!(game.active().cells().any(|(x, _)| x == 0));
}

#[test]
fn test_four_rotations_in_open_space() {
    let mut game = GameState::with_seed(&config(), 9);
    for _ in 0..5 {
        game.move_piece(0, 1);
    }
    let shape = *game.active().shape();
    let origin = game.active().origin();
    for _ in 0..4 {
        assert!(game.rotate());
    }
    assert_eq!(*game.active().shape(), shape);
    assert_eq!(game.active().origin(), origin);
}

#[test]
fn test_rotation_never_changes_the_catalog() {
    let mut game = GameState::with_seed(&config(), 13);
    game.rotate();
    for kind in PieceKind::ALL {
        let mut shape = kind.base_shape();
        for _ in 0..4 {
            shape = shape.rotated_clockwise();
        }
        assert_eq!(shape, kind.base_shape());
    }
    game.spawn().unwrap();
    assert_eq!(*game.active().shape(), game.active().kind().base_shape());
}

#[test]
fn test_stack_to_the_top_restarts() {
    let mut session = Session::with_seed(config(), GameOverPolicy::Restart, 77);
    let mut restarted = false;
    // Dropping every piece straight down tops out quickly.
    for _ in 0..2000 {
        if session.apply(Action::SoftDrop) == Tick::Restarted {
            restarted = true;
            break;
        }
    }
    assert!(restarted);
    assert!(!session.is_halted());
    let board = session.state().board();
    assert!((0..board.height()).all(|y| board.is_row_empty(y)));
}

#[test]
fn test_stack_to_the_top_halts() {
    let mut session = Session::with_seed(config(), GameOverPolicy::Halt, 77);
    let mut tick = Tick::Running;
    for _ in 0..2000 {
        tick = session.apply(Action::SoftDrop);
        if tick == Tick::Halted {
            break;
        }
    }
    assert_eq!(tick, Tick::Halted);
    assert!(session.state().is_over());
    assert_eq!(session.apply(Action::Rotate), Tick::Halted);

    session.restart().unwrap();
    assert!(!session.is_halted());
}
