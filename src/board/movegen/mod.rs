//! Pseudo-legal move generation.
//!
//! A pseudo-legal move follows the piece's movement pattern and the board's
//! occupancy but may leave the mover's own king in check. Legality filtering
//! lives in `rules`.

mod kings;
mod knights;
mod pawns;
mod sliders;

pub(crate) use sliders::SliderType;

use super::{Board, GameState, Piece, PieceKind, Square};

pub(crate) const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

pub(crate) const KING_OFFSETS: [(isize, isize); 8] = [
    (0, 1),
    (1, 0),
    (0, -1),
    (-1, 0),
    (1, 1),
    (1, -1),
    (-1, -1),
    (-1, 1),
];

impl Piece {
    /// Pseudo-legal destinations for this piece.
    ///
    /// Passing `None` for `game_state` disables en passant, which is what check
    /// detection wants: en passant can never capture a king.
    pub fn moves(&self, board: &Board, game_state: Option<&GameState>) -> Vec<Square> {
        board.generate_piece_moves(self, game_state)
    }
}

impl Board {
    pub(crate) fn generate_piece_moves(
        &self,
        piece: &Piece,
        game_state: Option<&GameState>,
    ) -> Vec<Square> {
        match piece.kind {
            PieceKind::Pawn => self.generate_pawn_moves(piece, game_state),
            PieceKind::Knight => self.generate_knight_moves(piece),
            PieceKind::Bishop => self.generate_slider_moves(piece, SliderType::Bishop),
            PieceKind::Rook => self.generate_slider_moves(piece, SliderType::Rook),
            PieceKind::Queen => self.generate_slider_moves(piece, SliderType::Queen),
            PieceKind::King => self.generate_king_moves(piece),
        }
    }

    /// Pseudo-legal destinations of whatever stands on `from`.
    pub fn pseudo_legal_moves(&self, from: Square, game_state: Option<&GameState>) -> Vec<Square> {
        self.piece_at(from)
            .map(|p| self.generate_piece_moves(p, game_state))
            .unwrap_or_default()
    }

    /// Single-step jumps from a fixed offset table. Empty squares and enemy
    /// pieces are reachable; own pieces are not.
    fn generate_jump_moves(&self, piece: &Piece, offsets: &[(isize, isize)]) -> Vec<Square> {
        offsets
            .iter()
            .filter_map(|&(dr, dc)| piece.position.offset(dr, dc))
            .filter(|&to| self.color_at(to) != Some(piece.color))
            .collect()
    }
}
