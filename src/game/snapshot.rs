#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{Board, Color, PieceKind, Square, BOARD_SIZE};

/// What a renderer needs to know about one occupied square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SquareView {
    pub color: Color,
    pub kind: PieceKind,
}

impl SquareView {
    /// Asset key such as `white_knight`.
    #[must_use]
    pub fn asset_name(&self) -> String {
        format!("{}_{}", self.color.name(), self.kind.name())
    }

    /// Single board character, uppercase for White.
    #[must_use]
    pub fn symbol(&self) -> char {
        match self.color {
            Color::White => self.kind.to_char().to_ascii_uppercase(),
            Color::Black => self.kind.to_char(),
        }
    }
}

/// Read-only copy of the board for rendering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoardSnapshot {
    cells: [[Option<SquareView>; BOARD_SIZE]; BOARD_SIZE],
}

impl BoardSnapshot {
    /// Contents of `sq`; off-board squares read as empty.
    #[must_use]
    pub fn at(&self, sq: Square) -> Option<SquareView> {
        self.cells.get(sq.0)?.get(sq.1).copied().flatten()
    }

    /// Occupied squares with their contents, row by row.
    pub fn occupied(&self) -> impl Iterator<Item = (Square, SquareView)> + '_ {
        Square::all().filter_map(|sq| self.at(sq).map(|view| (sq, view)))
    }
}

impl From<&Board> for BoardSnapshot {
    fn from(board: &Board) -> Self {
        let mut cells = [[None; BOARD_SIZE]; BOARD_SIZE];
        for piece in board.pieces() {
            let Square(row, col) = piece.position;
            cells[row][col] = Some(SquareView {
                color: piece.color,
                kind: piece.kind,
            });
        }
        BoardSnapshot { cells }
    }
}
