#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::CheckmateRule;

/// Settings fixed for the lifetime of a game or session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameConfig {
    /// Rule used to end the game after each turn switch.
    pub checkmate_rule: CheckmateRule,
    /// Index into [`THEMES`](super::THEMES) a session starts with; wraps around.
    pub initial_theme: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            checkmate_rule: CheckmateRule::Standard,
            initial_theme: 0,
        }
    }
}
