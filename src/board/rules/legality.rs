use super::super::{Board, Color, GameState, PieceKind, Square};

impl Board {
    /// The position after the piece on `from` moves to `to`.
    ///
    /// Only the moving piece's square and position change (plus the pawn
    /// removed by an en passant capture); `has_moved` and the en passant target
    /// are left alone because the result is only ever inspected, never played
    /// on. `self` is untouched.
    #[must_use]
    pub fn probe(&self, from: Square, to: Square) -> Board {
        let mut next = *self;
        if let Some(mut piece) = next.take(from) {
            // A pawn moving diagonally onto an empty square is an en passant capture.
            if piece.kind == PieceKind::Pawn && from.col() != to.col() && next.is_empty(to) {
                next.take(Square(from.row(), to.col()));
            }
            piece.position = to;
            next.put(piece);
        }
        next
    }

    /// Whether moving `from` -> `to` keeps the mover's king out of check.
    pub fn is_move_safe(&self, from: Square, to: Square) -> bool {
        match self.color_at(from) {
            Some(color) => !self.probe(from, to).is_in_check(color),
            None => false,
        }
    }

    /// Legal destinations for the piece on `from`, including castling
    /// destinations when it is a king.
    pub fn legal_moves(&self, from: Square, game_state: &GameState) -> Vec<Square> {
        let Some(piece) = self.piece_at(from) else {
            return Vec::new();
        };

        let mut moves: Vec<Square> = piece
            .moves(self, Some(game_state))
            .into_iter()
            .filter(|&to| self.is_move_safe(from, to))
            .collect();

        if piece.kind == PieceKind::King {
            moves.extend(self.castling_targets(piece.color));
        }
        moves
    }

    /// Whether `color` has at least one legal move. Stops at the first one.
    ///
    /// Castling is never needed here: a king that could castle could also step
    /// to the adjacent path square.
    pub fn has_legal_moves(&self, color: Color, game_state: Option<&GameState>) -> bool {
        self.pieces_of(color).any(|piece| {
            piece
                .moves(self, game_state)
                .into_iter()
                .any(|to| self.is_move_safe(piece.position, to))
        })
    }
}
