#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::super::{Board, Color, GameState};

/// How checkmate is decided after each turn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CheckmateRule {
    /// In check with no legal move for any piece.
    #[default]
    Standard,
    /// In check with no safe king step. Blocks and captures by other pieces are
    /// not considered, so some escapable checks count as mate.
    KingEscapeOnly,
}

impl CheckmateRule {
    pub fn is_checkmate(self, board: &Board, color: Color, game_state: Option<&GameState>) -> bool {
        match self {
            CheckmateRule::Standard => board.is_checkmate(color, game_state),
            CheckmateRule::KingEscapeOnly => board.is_king_escape_checkmate(color),
        }
    }
}

impl Board {
    /// `color` is in check and no legal move resolves it.
    pub fn is_checkmate(&self, color: Color, game_state: Option<&GameState>) -> bool {
        self.is_in_check(color) && !self.has_legal_moves(color, game_state)
    }

    /// `color` is in check and no king step escapes it.
    pub fn is_king_escape_checkmate(&self, color: Color) -> bool {
        let Some(king_sq) = self.find_king(color) else {
            return false;
        };
        let can_escape = self
            .pseudo_legal_moves(king_sq, None)
            .into_iter()
            .any(|to| self.is_move_safe(king_sq, to));
        !can_escape && self.is_in_check(color)
    }
}
