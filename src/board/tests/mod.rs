//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Pseudo-legal move patterns per piece
//! - `check.rs` - Check detection and legality filtering
//! - `castling.rs` - Castling eligibility and execution
//! - `en_passant.rs` - En passant generation and capture
//! - `promotion.rs` - Pawn promotion
//! - `checkmate.rs` - Checkmate under both rules, stalemate
//! - `proptest.rs` - Property-based tests

mod check;
mod proptest;

use std::collections::HashSet;

use crate::board::Square;

/// Parse a square name such as `e2`.
pub(super) fn sq(name: &str) -> Square {
    name.parse().expect("valid square name")
}

pub(super) fn squares(names: &[&str]) -> HashSet<Square> {
    names.iter().map(|n| sq(n)).collect()
}

pub(super) fn set(moves: Vec<Square>) -> HashSet<Square> {
    moves.into_iter().collect()
}
