//! Rules engine: check detection, legality filtering, castling, promotion and
//! checkmate, all expressed as operations over a [`Board`](super::Board).
//!
//! Every legality question is answered the same way: build the position that
//! would result from the move with [`Board::probe`](super::Board::probe) and ask
//! whether the mover's king is attacked there. The probe works on a copy, so
//! the board being asked about is never touched.

mod castling;
mod check;
mod checkmate;
mod legality;
mod promotion;

pub use checkmate::CheckmateRule;
