//! Castling side and the fixed squares it involves.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Color;
use super::square::Square;

/// Column the king starts on for both colors.
pub const KING_HOME_COL: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CastleSide {
    Kingside,
    Queenside,
}

impl CastleSide {
    pub const BOTH: [CastleSide; 2] = [CastleSide::Kingside, CastleSide::Queenside];

    /// Side implied by the king's destination column, if it is a castling column.
    #[must_use]
    pub const fn from_king_target(col: usize) -> Option<CastleSide> {
        match col {
            6 => Some(CastleSide::Kingside),
            2 => Some(CastleSide::Queenside),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn king_target_col(self) -> usize {
        match self {
            CastleSide::Kingside => 6,
            CastleSide::Queenside => 2,
        }
    }

    #[inline]
    #[must_use]
    pub const fn rook_home_col(self) -> usize {
        match self {
            CastleSide::Kingside => 7,
            CastleSide::Queenside => 0,
        }
    }

    #[inline]
    #[must_use]
    pub const fn rook_target_col(self) -> usize {
        match self {
            CastleSide::Kingside => 5,
            CastleSide::Queenside => 3,
        }
    }

    /// Columns strictly between king and rook; all must be empty.
    #[must_use]
    pub const fn between_cols(self) -> &'static [usize] {
        match self {
            CastleSide::Kingside => &[5, 6],
            CastleSide::Queenside => &[1, 2, 3],
        }
    }

    /// Columns the king crosses or lands on; none may be attacked.
    #[must_use]
    pub const fn king_path_cols(self) -> &'static [usize] {
        match self {
            CastleSide::Kingside => &[5, 6],
            CastleSide::Queenside => &[3, 2],
        }
    }

    #[must_use]
    pub const fn king_home(color: Color) -> Square {
        Square(color.home_row(), KING_HOME_COL)
    }

    #[must_use]
    pub const fn king_target(self, color: Color) -> Square {
        Square(color.home_row(), self.king_target_col())
    }

    #[must_use]
    pub const fn rook_home(self, color: Color) -> Square {
        Square(color.home_row(), self.rook_home_col())
    }

    #[must_use]
    pub const fn rook_target(self, color: Color) -> Square {
        Square(color.home_row(), self.rook_target_col())
    }
}
