//! Error types for board and game operations.

use std::fmt;

use super::types::{PieceKind, Square};

/// Error type for square construction and parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Row out of bounds (must be 0-7)
    RowOutOfBounds { row: usize },
    /// Column out of bounds (must be 0-7)
    ColOutOfBounds { col: usize },
    /// Invalid square name
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RowOutOfBounds { row } => {
                write!(f, "Row {row} out of bounds (must be 0-7)")
            }
            SquareError::ColOutOfBounds { col } => {
                write!(f, "Column {col} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for pawn promotion requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromotionError {
    /// Requested kind is not queen, rook, bishop or knight
    InvalidChoice { kind: PieceKind },
    /// No pawn standing on its promotion row at this square
    NotPromotable { square: Square },
    /// No move is waiting for a promotion choice
    NoPromotionPending,
}

impl fmt::Display for PromotionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PromotionError::InvalidChoice { kind } => {
                write!(
                    f,
                    "Cannot promote to {kind}, expected queen, rook, bishop or knight"
                )
            }
            PromotionError::NotPromotable { square } => {
                write!(f, "No pawn awaiting promotion on {square}")
            }
            PromotionError::NoPromotionPending => write!(f, "No promotion is pending"),
        }
    }
}

impl std::error::Error for PromotionError {}
