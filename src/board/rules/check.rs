use super::super::{Board, Color, Square};

impl Board {
    /// Whether `color`'s king is attacked.
    ///
    /// A board without a king for `color` is never in check. Attacks are taken
    /// from the opponents' pseudo-legal moves without en passant.
    pub fn is_in_check(&self, color: Color) -> bool {
        let Some(king_sq) = self.find_king(color) else {
            return false;
        };
        self.pieces_of(color.opponent())
            .any(|p| p.moves(self, None).contains(&king_sq))
    }

    /// Squares of the opposing pieces currently giving check to `color`.
    pub fn checkers(&self, color: Color) -> Vec<Square> {
        let Some(king_sq) = self.find_king(color) else {
            return Vec::new();
        };
        self.pieces_of(color.opponent())
            .filter(|p| p.moves(self, None).contains(&king_sq))
            .map(|p| p.position)
            .collect()
    }
}
