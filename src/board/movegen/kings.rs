use super::super::{Board, Piece, Square};
use super::KING_OFFSETS;

impl Board {
    /// One-square king steps. Castling destinations are added separately by
    /// `legal_moves`, never here, so attack probes cannot recurse into them.
    pub(crate) fn generate_king_moves(&self, king: &Piece) -> Vec<Square> {
        self.generate_jump_moves(king, &KING_OFFSETS)
    }
}
