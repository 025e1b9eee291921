use std::fmt;

use super::{Color, Piece, PieceKind, Square, BOARD_SIZE};

const BACK_ROW: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// 8x8 grid of optional pieces.
///
/// `Board` is a plain value. Move probes work on a copy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Standard starting position.
    pub fn new() -> Self {
        let mut board = Board::empty();
        for (col, kind) in BACK_ROW.iter().enumerate() {
            board.place(Square(0, col), Color::Black, *kind);
            board.place(Square(1, col), Color::Black, PieceKind::Pawn);
            board.place(Square(6, col), Color::White, PieceKind::Pawn);
            board.place(Square(7, col), Color::White, *kind);
        }
        board
    }

    pub fn empty() -> Self {
        Board {
            cells: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<&Piece> {
        self.cells[sq.0][sq.1].as_ref()
    }

    #[inline]
    pub(crate) fn piece_at_mut(&mut self, sq: Square) -> Option<&mut Piece> {
        self.cells[sq.0][sq.1].as_mut()
    }

    #[inline]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.cells[sq.0][sq.1].is_none()
    }

    /// Color of the piece on `sq`, if any.
    #[inline]
    pub fn color_at(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(|p| p.color)
    }

    /// Put a fresh, unmoved piece on `sq`, replacing whatever was there.
    pub fn place(&mut self, sq: Square, color: Color, kind: PieceKind) {
        self.cells[sq.0][sq.1] = Some(Piece::new(color, kind, sq));
    }

    /// Store `piece` at its own `position`, returning the previous occupant.
    pub fn put(&mut self, piece: Piece) -> Option<Piece> {
        let sq = piece.position;
        self.cells[sq.0][sq.1].replace(piece)
    }

    /// Remove and return the piece on `sq`.
    pub fn take(&mut self, sq: Square) -> Option<Piece> {
        self.cells[sq.0][sq.1].take()
    }

    /// Move the piece on `from` to `to` and mark it moved.
    ///
    /// Returns the captured occupant of `to`, if any. Does nothing when `from`
    /// is empty.
    pub fn relocate(&mut self, from: Square, to: Square) -> Option<Piece> {
        let mut piece = self.take(from)?;
        piece.position = to;
        piece.has_moved = true;
        self.put(piece)
    }

    /// All pieces on the board, row by row.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.cells.iter().flatten().flatten()
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = &Piece> + '_ {
        self.pieces().filter(move |p| p.color == color)
    }

    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces()
            .find(|p| p.is(color, PieceKind::King))
            .map(|p| p.position)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  +-----------------+")?;
        for (row, cells) in self.cells.iter().enumerate() {
            write!(f, "{} |", BOARD_SIZE - row)?;
            for cell in cells {
                let ch = cell.as_ref().map_or('.', Piece::symbol);
                write!(f, " {ch}")?;
            }
            writeln!(f, " |")?;
        }
        writeln!(f, "  +-----------------+")?;
        write!(f, "    a b c d e f g h")
    }
}

/// Transient state that the grid alone cannot express.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GameState {
    en_passant_target: Option<Square>,
}

impl GameState {
    pub fn new() -> Self {
        GameState::default()
    }

    /// Square a pawn skipped on the previous move, capturable en passant.
    #[inline]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    pub fn set_en_passant(&mut self, target: Square) {
        self.en_passant_target = Some(target);
    }

    pub fn reset_en_passant(&mut self) {
        self.en_passant_target = None;
    }
}
