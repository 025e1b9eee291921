//! Check detection and legality filtering tests.

use super::{set, sq, squares};
use crate::board::{Board, BoardBuilder, Color, GameState, PieceKind};

#[test]
fn test_starting_position_not_in_check() {
    let board = Board::new();
    assert!(!board.is_in_check(Color::White));
    assert!(!board.is_in_check(Color::Black));
}

#[test]
fn test_missing_king_is_never_in_check() {
    let board = BoardBuilder::new()
        .piece(sq("e4"), Color::Black, PieceKind::Queen)
        .build();
    assert!(!board.is_in_check(Color::White));
    assert!(board.checkers(Color::White).is_empty());
}

#[test]
fn test_rook_gives_check_on_open_file() {
    let board = BoardBuilder::new()
        .piece(sq("e1"), Color::White, PieceKind::King)
        .piece(sq("e8"), Color::Black, PieceKind::Rook)
        .build();
    assert!(board.is_in_check(Color::White));
    assert_eq!(board.checkers(Color::White), vec![sq("e8")]);
}

#[test]
fn test_blocked_rook_gives_no_check() {
    let board = BoardBuilder::new()
        .piece(sq("e1"), Color::White, PieceKind::King)
        .piece(sq("e4"), Color::Black, PieceKind::Knight)
        .piece(sq("e8"), Color::Black, PieceKind::Rook)
        .build();
    assert!(!board.is_in_check(Color::White));
}

#[test]
fn test_pawn_checks_diagonally_only() {
    let straight = BoardBuilder::new()
        .piece(sq("e4"), Color::White, PieceKind::King)
        .piece(sq("e5"), Color::Black, PieceKind::Pawn)
        .build();
    assert!(!straight.is_in_check(Color::White));

    let diagonal = BoardBuilder::new()
        .piece(sq("e4"), Color::White, PieceKind::King)
        .piece(sq("d5"), Color::Black, PieceKind::Pawn)
        .build();
    assert!(diagonal.is_in_check(Color::White));
}

#[test]
fn test_pinned_piece_cannot_leave_the_pin() {
    let board = BoardBuilder::new()
        .piece(sq("e1"), Color::White, PieceKind::King)
        .piece(sq("e2"), Color::White, PieceKind::Knight)
        .piece(sq("e8"), Color::Black, PieceKind::Rook)
        .build();
    assert!(board.legal_moves(sq("e2"), &GameState::new()).is_empty());
}

#[test]
fn test_pinned_rook_may_slide_along_the_pin() {
    let board = BoardBuilder::new()
        .piece(sq("e1"), Color::White, PieceKind::King)
        .piece(sq("e2"), Color::White, PieceKind::Rook)
        .piece(sq("e5"), Color::Black, PieceKind::Rook)
        .build();
    assert_eq!(
        set(board.legal_moves(sq("e2"), &GameState::new())),
        squares(&["e3", "e4", "e5"])
    );
}

#[test]
fn test_king_cannot_step_into_attack() {
    let board = BoardBuilder::new()
        .piece(sq("e1"), Color::White, PieceKind::King)
        .piece(sq("d8"), Color::Black, PieceKind::Rook)
        .piece(sq("f8"), Color::Black, PieceKind::Rook)
        .build();
    assert_eq!(
        set(board.legal_moves(sq("e1"), &GameState::new())),
        squares(&["e2"])
    );
}

#[test]
fn test_king_cannot_capture_defended_piece() {
    let board = BoardBuilder::new()
        .piece(sq("e1"), Color::White, PieceKind::King)
        .piece(sq("e2"), Color::Black, PieceKind::Queen)
        .piece(sq("e8"), Color::Black, PieceKind::Rook)
        .build();
    assert!(!board
        .legal_moves(sq("e1"), &GameState::new())
        .contains(&sq("e2")));
}

#[test]
fn test_probe_leaves_board_untouched() {
    let board = BoardBuilder::starting_position()
        .piece(sq("d7"), Color::White, PieceKind::Knight)
        .build();
    let before = board;
    let probed = board.probe(sq("d7"), sq("f8"));

    assert_eq!(board, before);
    assert!(probed.is_empty(sq("d7")));
    assert!(probed
        .piece_at(sq("f8"))
        .is_some_and(|p| p.is(Color::White, PieceKind::Knight) && p.position == sq("f8")));
}

#[test]
fn test_has_legal_moves_short_circuits_per_color() {
    let board = Board::new();
    assert!(board.has_legal_moves(Color::White, None));
    assert!(board.has_legal_moves(Color::Black, None));
}
