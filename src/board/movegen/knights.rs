use super::super::{Board, Piece, Square};
use super::KNIGHT_OFFSETS;

impl Board {
    pub(crate) fn generate_knight_moves(&self, knight: &Piece) -> Vec<Square> {
        self.generate_jump_moves(knight, &KNIGHT_OFFSETS)
    }
}
