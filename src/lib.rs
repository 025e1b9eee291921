/// Emits a `log` record when the `logging` feature is enabled, nothing otherwise.
#[cfg(feature = "logging")]
macro_rules! engine_log {
    ($level:ident, $($arg:tt)+) => {
        log::$level!($($arg)+)
    };
}

#[cfg(not(feature = "logging"))]
macro_rules! engine_log {
    ($level:ident, $($arg:tt)+) => {
        ()
    };
}

pub mod board;
pub mod game;

pub use board::{Board, Color, GameState, Piece, PieceKind, Square};
pub use game::{Game, GameConfig, Session, TurnEvent};
