use super::super::{Board, CastleSide, Color, PieceKind, Square};

impl Board {
    /// Whether `color` may castle towards `side` right now.
    ///
    /// Requires king and rook unmoved on their home squares, an empty gap
    /// between them, and a king that is neither in check nor crosses or lands
    /// on an attacked square.
    pub fn can_castle(&self, color: Color, side: CastleSide) -> bool {
        let row = color.home_row();
        let king_sq = CastleSide::king_home(color);

        let (Some(king), Some(rook)) = (self.piece_at(king_sq), self.piece_at(side.rook_home(color)))
        else {
            return false;
        };
        if !king.is(color, PieceKind::King) || !rook.is(color, PieceKind::Rook) {
            return false;
        }
        if king.has_moved || rook.has_moved {
            return false;
        }
        if side
            .between_cols()
            .iter()
            .any(|&col| !self.is_empty(Square(row, col)))
        {
            return false;
        }
        if self.is_in_check(color) {
            return false;
        }

        // Only the king is probed; the rook stays home during the test.
        side.king_path_cols()
            .iter()
            .all(|&col| !self.probe(king_sq, Square(row, col)).is_in_check(color))
    }

    /// King destinations for every side `color` may castle towards.
    pub fn castling_targets(&self, color: Color) -> Vec<Square> {
        CastleSide::BOTH
            .into_iter()
            .filter(|&side| self.can_castle(color, side))
            .map(|side| side.king_target(color))
            .collect()
    }

    /// Move king and rook to their castled squares and mark both moved.
    ///
    /// Callers must have seen `can_castle` succeed for this position.
    pub fn perform_castle(&mut self, color: Color, side: CastleSide) {
        debug_assert!(
            self.can_castle(color, side),
            "castling {side:?} is not available for {color}"
        );

        let king = self.take(CastleSide::king_home(color));
        let rook = self.take(side.rook_home(color));

        for (piece, target) in [
            (king, side.king_target(color)),
            (rook, side.rook_target(color)),
        ] {
            if let Some(mut piece) = piece {
                piece.position = target;
                piece.has_moved = true;
                self.put(piece);
            }
        }
        engine_log!(debug, "{color} castled {side:?}");
    }
}
