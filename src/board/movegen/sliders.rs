use super::super::{Board, Piece, Square};

const ROOK_DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];
const BISHOP_DIRECTIONS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, -1), (-1, 1)];
const QUEEN_DIRECTIONS: [(isize, isize); 8] = [
    (0, 1),
    (1, 0),
    (0, -1),
    (-1, 0),
    (1, 1),
    (1, -1),
    (-1, -1),
    (-1, 1),
];

/// Type of sliding piece for move generation
#[derive(Clone, Copy)]
pub(crate) enum SliderType {
    Bishop,
    Rook,
    Queen,
}

impl SliderType {
    const fn directions(self) -> &'static [(isize, isize)] {
        match self {
            SliderType::Bishop => &BISHOP_DIRECTIONS,
            SliderType::Rook => &ROOK_DIRECTIONS,
            SliderType::Queen => &QUEEN_DIRECTIONS,
        }
    }
}

impl Board {
    pub(crate) fn generate_slider_moves(&self, piece: &Piece, slider: SliderType) -> Vec<Square> {
        let mut moves = Vec::new();

        for &(dr, dc) in slider.directions() {
            let mut next = piece.position.offset(dr, dc);
            while let Some(to) = next {
                match self.color_at(to) {
                    None => moves.push(to),
                    Some(color) => {
                        if color != piece.color {
                            moves.push(to);
                        }
                        break;
                    }
                }
                next = to.offset(dr, dc);
            }
        }
        moves
    }
}
