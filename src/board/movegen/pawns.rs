use super::super::{Board, GameState, Piece, Square};

impl Board {
    pub(crate) fn generate_pawn_moves(
        &self,
        pawn: &Piece,
        game_state: Option<&GameState>,
    ) -> Vec<Square> {
        let mut moves = Vec::new();
        let dir = pawn.color.pawn_direction();
        let from = pawn.position;

        if let Some(forward) = from.offset(dir, 0) {
            if self.is_empty(forward) {
                moves.push(forward);
                if from.row() == pawn.color.pawn_start_row() {
                    if let Some(double) = forward.offset(dir, 0) {
                        if self.is_empty(double) {
                            moves.push(double);
                        }
                    }
                }
            }
        }

        let en_passant_target = game_state.and_then(GameState::en_passant_target);
        for dc in [-1, 1] {
            let Some(target) = from.offset(dir, dc) else {
                continue;
            };
            match self.color_at(target) {
                Some(color) if color != pawn.color => moves.push(target),
                // Only the target square is matched; the pawn being captured
                // sits beside us, not on the target.
                None if en_passant_target == Some(target) => moves.push(target),
                _ => {}
            }
        }

        moves
    }
}
