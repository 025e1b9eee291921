//! Property-based tests using proptest.
//!
//! Positions come from random playouts through the turn controller, so every
//! position checked is one a real game can reach.

use crate::board::{Color, PieceKind, Square};
use crate::game::{Game, GameConfig, TurnEvent};
use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Strategy to generate a random playout length
fn move_count_strategy() -> impl Strategy<Value = usize> {
    1..=60usize
}

/// Strategy to generate a random seed for move selection
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

/// Every legal (from, to) pair for the side to move.
fn all_legal_moves(game: &Game) -> Vec<(Square, Square)> {
    let board = game.board();
    board
        .pieces_of(game.current_player())
        .flat_map(|p| {
            board
                .legal_moves(p.position, game.game_state())
                .into_iter()
                .map(move |to| (p.position, to))
        })
        .collect()
}

/// Play one random legal move through clicks. Returns `None` once the side to
/// move is stuck or the game has ended.
fn play_random_move(game: &mut Game, rng: &mut StdRng) -> Option<(Square, Square, TurnEvent)> {
    if game.is_game_over() {
        return None;
    }
    let moves = all_legal_moves(game);
    if moves.is_empty() {
        return None;
    }
    let (from, to) = moves[rng.gen_range(0..moves.len())];

    game.click(from);
    let mut event = game.click(to);
    if let TurnEvent::PromotionRequired { .. } = event {
        let choice = PieceKind::PROMOTION_CHOICES[rng.gen_range(0..4)];
        event = game
            .choose_promotion(choice)
            .expect("promotion choice is valid");
    }
    Some((from, to, event))
}

proptest! {
    /// Property: generated moves never leave the board
    #[test]
    fn prop_moves_stay_on_board(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut game = Game::new(GameConfig::default());
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..num_moves {
            let board = *game.board();
            for piece in board.pieces() {
                for to in piece.moves(&board, Some(game.game_state())) {
                    prop_assert!(Square::new(to.row(), to.col()).is_some(),
                        "{:?} produced off-board {:?}", piece, to);
                }
            }
            if play_random_move(&mut game, &mut rng).is_none() {
                break;
            }
        }
    }

    /// Property: a trial move changes only the squares the move touches, and
    /// selecting a piece never changes the board
    #[test]
    fn prop_trial_move_touches_only_its_squares(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut game = Game::new(GameConfig::default());
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..num_moves {
            let board = *game.board();
            for piece in board.pieces() {
                let from = piece.position;
                for to in piece.moves(&board, Some(game.game_state())) {
                    let after = board.probe(from, to);
                    let victim = (piece.kind == PieceKind::Pawn
                        && from.col() != to.col()
                        && board.is_empty(to))
                        .then(|| Square(from.row(), to.col()));

                    prop_assert!(after.is_empty(from));
                    let moved = after.piece_at(to).copied();
                    prop_assert_eq!(moved.map(|p| (p.color, p.kind, p.position)),
                        Some((piece.color, piece.kind, to)));
                    if let Some(victim) = victim {
                        prop_assert!(after.is_empty(victim), "en passant victim left on {}", victim);
                    }
                    for sq in Square::all() {
                        if sq != from && sq != to && Some(sq) != victim {
                            prop_assert_eq!(after.piece_at(sq), board.piece_at(sq),
                                "trial move {}->{} changed {}", from, to, sq);
                        }
                    }
                }

                if piece.color == game.current_player() {
                    let mut selecting = game.clone();
                    selecting.click(from);
                    prop_assert_eq!(selecting.board(), &board);
                    prop_assert_eq!(selecting.game_state(), game.game_state());
                }
            }
            if play_random_move(&mut game, &mut rng).is_none() {
                break;
            }
        }
    }

    /// Property: a committed move never leaves the mover in check, and check
    /// always matches an opposing pseudo-legal move onto the king
    #[test]
    fn prop_committed_moves_are_legal(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut game = Game::new(GameConfig::default());
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..num_moves {
            let mover = game.current_player();
            if play_random_move(&mut game, &mut rng).is_none() {
                break;
            }
            let board = game.board();
            prop_assert!(!board.is_in_check(mover), "{} left in check:\n{}", mover, board);

            for color in Color::BOTH {
                let king = board.find_king(color).expect("both kings stay on the board");
                let attacked = board
                    .pieces_of(color.opponent())
                    .any(|p| p.moves(board, None).contains(&king));
                prop_assert_eq!(board.is_in_check(color), attacked);
            }
        }
    }

    /// Property: each side keeps exactly one king, and every piece's position
    /// matches the cell holding it
    #[test]
    fn prop_board_stays_consistent(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut game = Game::new(GameConfig::default());
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..num_moves {
            if play_random_move(&mut game, &mut rng).is_none() {
                break;
            }
            let board = game.board();
            for color in Color::BOTH {
                let kings = board
                    .pieces_of(color)
                    .filter(|p| p.kind == PieceKind::King)
                    .count();
                prop_assert_eq!(kings, 1);
            }
            for square in Square::all() {
                if let Some(piece) = board.piece_at(square) {
                    prop_assert_eq!(piece.position, square);
                }
            }
        }
    }

    /// Property: the en passant target survives only a pawn double step
    #[test]
    fn prop_en_passant_target_only_after_double_step(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut game = Game::new(GameConfig::default());
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..num_moves {
            let Some((from, to, event)) = play_random_move(&mut game, &mut rng) else {
                break;
            };
            let moved_pawn = match event {
                TurnEvent::Moved(record) | TurnEvent::Checkmate { last_move: record, .. } => {
                    record.kind == PieceKind::Pawn
                }
                _ => false,
            };
            let expected = (moved_pawn && from.row().abs_diff(to.row()) == 2)
                .then(|| Square((from.row() + to.row()) / 2, to.col()));
            prop_assert_eq!(game.game_state().en_passant_target(), expected);
        }
    }
}
