//! Prelude module for convenient imports.
//!
//! # Example
//! ```
//! use hotseat_chess::board::prelude::*;
//! ```

pub use super::{
    Board, BoardBuilder, CastleSide, CheckmateRule, Color, GameState, Piece, PieceKind,
    PromotionError, Square, SquareError,
};
