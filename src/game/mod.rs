//! Game orchestration on top of the rules engine.
//!
//! [`Game`] is the turn controller: it owns the board, the en passant state and
//! whose turn it is, and advances through select -> move -> (promote) -> next
//! turn. [`Session`] wraps a game with the presentation state a host needs.

mod config;
mod controller;
mod session;
mod snapshot;
mod theme;


pub use config::GameConfig;
pub use controller::{Game, MoveRecord, Phase, TurnEvent};
pub use session::{Frame, Intent, Session};
pub use snapshot::{BoardSnapshot, SquareView};
pub use theme::{Rgb, Theme, HIGHLIGHT_RGBA, THEMES};
