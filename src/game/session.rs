//! Session: the object a display/input host talks to.
//!
//! Holds the game together with presentation state (the active theme) so that
//! nothing about the interface lives in process-wide globals.

use crate::board::{Color, PieceKind, PromotionError, Square};

use super::{BoardSnapshot, Game, GameConfig, Theme, TurnEvent, THEMES};

/// A user intent coming from the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intent {
    /// A click on a board square, routed by the controller's phase.
    Click(Square),
    Select(Square),
    MoveTo(Square),
    ChoosePromotion(PieceKind),
    Reset,
    NextTheme,
}

/// Everything a renderer draws for one frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    pub board: BoardSnapshot,
    pub theme: Theme,
    /// Legal destinations of the current selection.
    pub highlights: Vec<Square>,
    pub to_move: Color,
    pub winner: Option<Color>,
    pub pending_promotion: Option<Square>,
}

#[derive(Clone, Debug)]
pub struct Session {
    game: Game,
    theme_index: usize,
}

impl Default for Session {
    fn default() -> Self {
        Session::new(GameConfig::default())
    }
}

impl Session {
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Session::with_game(Game::new(config))
    }

    /// Wrap an existing game, e.g. one built from a custom position.
    #[must_use]
    pub fn with_game(game: Game) -> Self {
        let theme_index = game.config().initial_theme % THEMES.len();
        Session { game, theme_index }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn theme_index(&self) -> usize {
        self.theme_index
    }

    pub fn theme(&self) -> Theme {
        THEMES[self.theme_index]
    }

    /// Apply one intent.
    ///
    /// Board clicks are ignored once the game is over; reset and theme changes
    /// always apply. Only a promotion choice can fail.
    pub fn handle(&mut self, intent: Intent) -> Result<TurnEvent, PromotionError> {
        let event = match intent {
            Intent::Click(sq) => self.game.click(sq),
            Intent::Select(sq) => self.game.select(sq),
            Intent::MoveTo(sq) => self.game.move_to(sq),
            Intent::ChoosePromotion(kind) => self.game.choose_promotion(kind)?,
            Intent::Reset => self.game.reset(),
            Intent::NextTheme => self.next_theme(),
        };
        Ok(event)
    }

    pub fn next_theme(&mut self) -> TurnEvent {
        self.theme_index = (self.theme_index + 1) % THEMES.len();
        engine_log!(debug, "theme changed to {}", self.theme_index);
        TurnEvent::ThemeChanged {
            index: self.theme_index,
        }
    }

    pub fn frame(&self) -> Frame {
        Frame {
            board: self.game.snapshot(),
            theme: self.theme(),
            highlights: self.game.legal_destinations().to_vec(),
            to_move: self.game.current_player(),
            winner: self.game.winner(),
            pending_promotion: self.game.pending_promotion(),
        }
    }
}
