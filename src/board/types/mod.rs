//! Core chess types.
//!
//! - `Color`, `PieceKind` and `Piece` - piece identity and per-piece state
//! - `Square` - (row, col) board coordinate
//! - `CastleSide` - castling direction and its fixed squares

mod castling;
mod piece;
mod square;

pub use castling::{CastleSide, KING_HOME_COL};
pub use piece::{Color, Piece, PieceKind};
pub use square::{Square, BOARD_SIZE};
