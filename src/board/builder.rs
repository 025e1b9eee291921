//! Fluent builder for constructing chess positions.
//!
//! Allows creating positions piece by piece, which is how tests and hosts set
//! up anything other than the starting position.
//!
//! # Example
//! ```
//! use hotseat_chess::board::{BoardBuilder, Color, PieceKind, Square};
//!
//! let board = BoardBuilder::new()
//!     .piece(Square(7, 4), Color::White, PieceKind::King)
//!     .piece(Square(0, 4), Color::Black, PieceKind::King)
//!     .piece(Square(6, 0), Color::White, PieceKind::Pawn)
//!     .build();
//! assert_eq!(board.pieces().count(), 3);
//! ```

use super::{Board, Color, GameState, Piece, PieceKind, Square};
use crate::game::{Game, GameConfig};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    pieces: Vec<Piece>,
    side_to_move: Color,
    en_passant_target: Option<Square>,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            pieces: Vec::new(),
            side_to_move: Color::White,
            en_passant_target: None,
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let mut builder = Self::new();
        builder.pieces = Board::new().pieces().copied().collect();
        builder
    }

    /// Place an unmoved piece on the board.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, kind: PieceKind) -> Self {
        self.pieces.retain(|p| p.position != square);
        self.pieces.push(Piece::new(color, kind, square));
        self
    }

    /// Place a piece that has already moved (it can no longer castle).
    #[must_use]
    pub fn moved_piece(self, square: Square, color: Color, kind: PieceKind) -> Self {
        self.piece(square, color, kind).mark_moved(square)
    }

    /// Flag the piece on `square` as having moved.
    #[must_use]
    pub fn mark_moved(mut self, square: Square) -> Self {
        if let Some(p) = self.pieces.iter_mut().find(|p| p.position == square) {
            p.has_moved = true;
        }
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|p| p.position != square);
        self
    }

    /// Set the side to move.
    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    /// Set the en passant target square.
    #[must_use]
    pub const fn en_passant(mut self, target: Square) -> Self {
        self.en_passant_target = Some(target);
        self
    }

    /// Build the board.
    #[must_use]
    pub fn build(&self) -> Board {
        let mut board = Board::empty();
        for piece in &self.pieces {
            board.put(*piece);
        }
        board
    }

    /// Build the en passant state for the position.
    #[must_use]
    pub fn game_state(&self) -> GameState {
        let mut state = GameState::new();
        if let Some(target) = self.en_passant_target {
            state.set_en_passant(target);
        }
        state
    }

    /// Start a game from this position with `side_to_move` to play.
    #[must_use]
    pub fn into_game(self, config: GameConfig) -> Game {
        Game::from_position(self.build(), self.game_state(), self.side_to_move, config)
    }
}
