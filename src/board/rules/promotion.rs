use super::super::{Board, PieceKind, PromotionError, Square};

impl Board {
    /// Whether a pawn stands on its far row at `sq`.
    pub fn needs_promotion(&self, sq: Square) -> bool {
        self.piece_at(sq).is_some_and(|p| {
            p.kind == PieceKind::Pawn && sq.row() == p.color.promotion_row()
        })
    }

    /// Turn the pawn on `sq` into `kind`, keeping its color and position.
    pub fn promote(&mut self, sq: Square, kind: PieceKind) -> Result<(), PromotionError> {
        if !kind.is_promotion_choice() {
            return Err(PromotionError::InvalidChoice { kind });
        }
        if !self.needs_promotion(sq) {
            return Err(PromotionError::NotPromotable { square: sq });
        }
        let pawn = self
            .piece_at_mut(sq)
            .ok_or(PromotionError::NotPromotable { square: sq })?;
        pawn.kind = kind;
        pawn.has_moved = true;
        engine_log!(debug, "{} pawn on {sq} promoted to {kind}", pawn.color);
        Ok(())
    }
}
