//! Chess board representation and rules.
//!
//! The board is an 8x8 grid of optional pieces, row 0 being black's back rank.
//! Move generation produces pseudo-legal destinations per piece; the rules
//! layer filters them by king safety and adds castling, promotion and
//! checkmate detection.
//!
//! # Example
//! ```
//! use hotseat_chess::board::{Board, GameState, Square};
//!
//! let board = Board::new();
//! let moves = board.legal_moves(Square(6, 4), &GameState::new());
//! assert_eq!(moves, vec![Square(5, 4), Square(4, 4)]);
//! ```

mod builder;
mod error;
mod movegen;
pub mod prelude;
mod rules;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{PromotionError, SquareError};
pub use rules::CheckmateRule;
pub use state::{Board, GameState};
pub use types::{CastleSide, Color, Piece, PieceKind, Square, BOARD_SIZE, KING_HOME_COL};
