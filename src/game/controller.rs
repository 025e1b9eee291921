//! Turn controller: turns clicks into committed moves.

use crate::board::{
    Board, CastleSide, Color, GameState, PieceKind, PromotionError, Square,
};

use super::{BoardSnapshot, GameConfig};

/// Where the controller is within a turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the current player to pick a piece.
    NoSelection,
    /// A piece is picked; `destinations` are its legal targets.
    Selected {
        from: Square,
        destinations: Vec<Square>,
    },
    /// A pawn reached its far row; the move finishes once a kind is chosen.
    AwaitingPromotion { pending: MoveRecord },
    /// Checkmate was detected. Only a reset leaves this phase.
    GameOver { winner: Color },
}

/// Summary of a committed move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveRecord {
    pub color: Color,
    pub from: Square,
    pub to: Square,
    /// Kind of the piece before any promotion.
    pub kind: PieceKind,
    pub captured: Option<PieceKind>,
    pub castle: Option<CastleSide>,
    pub en_passant: bool,
    pub promotion: Option<PieceKind>,
}

/// Result of feeding one intent to the controller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnEvent {
    /// The input had no effect in the current phase.
    Ignored,
    Selected {
        from: Square,
        destinations: Vec<Square>,
    },
    /// The selection was dropped by clicking a non-destination square.
    Deselected,
    /// A move was committed and the turn passed to the other player.
    Moved(MoveRecord),
    /// The move stopped on `square`; call `choose_promotion` to finish it.
    PromotionRequired { square: Square },
    /// A move was committed and left the other player checkmated.
    Checkmate { winner: Color, last_move: MoveRecord },
    Reset,
    ThemeChanged { index: usize },
}

/// Two-player game driven by square clicks.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    state: GameState,
    current_player: Color,
    phase: Phase,
    config: GameConfig,
}

impl Default for Game {
    fn default() -> Self {
        Game::new(GameConfig::default())
    }
}

impl Game {
    /// Standard starting position, white to move.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Game::from_position(Board::new(), GameState::new(), Color::White, config)
    }

    #[must_use]
    pub fn from_position(
        board: Board,
        state: GameState,
        current_player: Color,
        config: GameConfig,
    ) -> Self {
        Game {
            board,
            state,
            current_player,
            phase: Phase::NoSelection,
            config,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn game_state(&self) -> &GameState {
        &self.state
    }

    pub fn current_player(&self) -> Color {
        self.current_player
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot::from(&self.board)
    }

    pub fn selected(&self) -> Option<Square> {
        match self.phase {
            Phase::Selected { from, .. } => Some(from),
            _ => None,
        }
    }

    /// Legal destinations of the current selection, empty without one.
    pub fn legal_destinations(&self) -> &[Square] {
        match &self.phase {
            Phase::Selected { destinations, .. } => destinations,
            _ => &[],
        }
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self.phase, Phase::GameOver { .. })
    }

    pub fn winner(&self) -> Option<Color> {
        match self.phase {
            Phase::GameOver { winner } => Some(winner),
            _ => None,
        }
    }

    /// Square of the pawn waiting for a promotion choice.
    pub fn pending_promotion(&self) -> Option<Square> {
        match &self.phase {
            Phase::AwaitingPromotion { pending } => Some(pending.to),
            _ => None,
        }
    }

    /// Route a board click the way a mouse handler would: pick a piece when
    /// nothing is selected, otherwise try to move the selection there.
    pub fn click(&mut self, sq: Square) -> TurnEvent {
        if !sq.is_on_board() {
            return TurnEvent::Ignored;
        }
        match self.phase {
            Phase::NoSelection => self.select(sq),
            Phase::Selected { .. } => self.move_to(sq),
            Phase::AwaitingPromotion { .. } | Phase::GameOver { .. } => TurnEvent::Ignored,
        }
    }

    /// Select the current player's piece on `sq` and compute its legal moves.
    ///
    /// Only acts while nothing is selected. A piece with no legal move is still
    /// selected, with an empty destination list.
    pub fn select(&mut self, sq: Square) -> TurnEvent {
        if self.phase != Phase::NoSelection || !sq.is_on_board() {
            return TurnEvent::Ignored;
        }
        if self.board.color_at(sq) != Some(self.current_player) {
            return TurnEvent::Ignored;
        }

        let destinations = self.board.legal_moves(sq, &self.state);
        engine_log!(
            trace,
            "{} selected {sq}: {} legal destinations",
            self.current_player,
            destinations.len()
        );
        self.phase = Phase::Selected {
            from: sq,
            destinations: destinations.clone(),
        };
        TurnEvent::Selected {
            from: sq,
            destinations,
        }
    }

    /// Move the selected piece to `sq`.
    ///
    /// Any square outside the legal destinations drops the selection instead;
    /// the click is not reused to select another piece. Off-board squares are
    /// ignored and keep the selection.
    pub fn move_to(&mut self, sq: Square) -> TurnEvent {
        if !sq.is_on_board() {
            return TurnEvent::Ignored;
        }
        let (from, legal) = match &self.phase {
            Phase::Selected { from, destinations } => (*from, destinations.contains(&sq)),
            _ => return TurnEvent::Ignored,
        };

        if !legal {
            self.phase = Phase::NoSelection;
            return TurnEvent::Deselected;
        }
        self.commit(from, sq)
    }

    /// Finish a move suspended on promotion by turning the pawn into `kind`.
    ///
    /// An invalid kind leaves the move suspended so a valid choice can follow.
    pub fn choose_promotion(&mut self, kind: PieceKind) -> Result<TurnEvent, PromotionError> {
        let Phase::AwaitingPromotion { pending } = &self.phase else {
            return Err(PromotionError::NoPromotionPending);
        };
        let mut record = *pending;

        self.board.promote(record.to, kind)?;
        record.promotion = Some(kind);
        Ok(self.finish_turn(record))
    }

    /// Start over from the initial position with white to move.
    pub fn reset(&mut self) -> TurnEvent {
        self.board = Board::new();
        self.state = GameState::new();
        self.current_player = Color::White;
        self.phase = Phase::NoSelection;
        engine_log!(info, "game reset");
        TurnEvent::Reset
    }

    fn commit(&mut self, from: Square, to: Square) -> TurnEvent {
        let Some(piece) = self.board.piece_at(from).copied() else {
            self.phase = Phase::NoSelection;
            return TurnEvent::Deselected;
        };

        let mut record = MoveRecord {
            color: piece.color,
            from,
            to,
            kind: piece.kind,
            captured: None,
            castle: None,
            en_passant: false,
            promotion: None,
        };

        let castle = (piece.kind == PieceKind::King && from.col().abs_diff(to.col()) == 2)
            .then(|| CastleSide::from_king_target(to.col()))
            .flatten();

        if let Some(side) = castle {
            self.board.perform_castle(piece.color, side);
            self.state.reset_en_passant();
            record.castle = Some(side);
            return self.finish_turn(record);
        }

        let is_pawn = piece.kind == PieceKind::Pawn;

        // En passant: the captured pawn stands beside the mover, not on `to`.
        if is_pawn && from.col() != to.col() && self.state.en_passant_target() == Some(to) {
            let victim = Square(from.row(), to.col());
            record.captured = self.board.take(victim).map(|p| p.kind);
            record.en_passant = true;
            engine_log!(debug, "en passant capture on {to} removes pawn on {victim}");
        }

        if let Some(captured) = self.board.relocate(from, to) {
            record.captured = Some(captured.kind);
        }

        if is_pawn && from.row().abs_diff(to.row()) == 2 {
            self.state
                .set_en_passant(Square((from.row() + to.row()) / 2, to.col()));
        } else {
            self.state.reset_en_passant();
        }

        if is_pawn && self.board.needs_promotion(to) {
            engine_log!(debug, "{} pawn reached {to}, awaiting promotion", piece.color);
            self.phase = Phase::AwaitingPromotion { pending: record };
            return TurnEvent::PromotionRequired { square: to };
        }

        self.finish_turn(record)
    }

    fn finish_turn(&mut self, record: MoveRecord) -> TurnEvent {
        engine_log!(
            debug,
            "{} {} {} -> {}",
            record.color,
            record.kind,
            record.from,
            record.to
        );

        self.current_player = self.current_player.opponent();

        let mated = self.config.checkmate_rule.is_checkmate(
            &self.board,
            self.current_player,
            Some(&self.state),
        );
        if mated {
            let winner = self.current_player.opponent();
            engine_log!(info, "checkmate, {winner} wins");
            self.phase = Phase::GameOver { winner };
            return TurnEvent::Checkmate {
                winner,
                last_move: record,
            };
        }

        self.phase = Phase::NoSelection;
        TurnEvent::Moved(record)
    }
}
