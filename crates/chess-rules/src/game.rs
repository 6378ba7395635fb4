//! The turn state machine.
//!
//! [`Game`] owns the live position and the undo history. Front ends drive it
//! through a request/response API: select a square to get its legal
//! destinations, attempt a move, undo, and read back a [`GameView`] to render.
//! Every request either fully applies or leaves the game untouched.

use crate::history::{History, Snapshot};
use crate::position::Played;
use crate::rules::check::is_in_check;
use crate::rules::{LegalMove, Rules};
use crate::{Board, CastlingRights, Position, RulesConfig};
use chess_core::{Color, FenError, Move, Square};
use thiserror::Error;

/// Whether the game is still being played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    InProgress,
    /// The contained color delivered mate.
    Checkmate(Color),
}

/// Where the game stands in the select → move cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    AwaitingSelection,
    PieceSelected(Square),
    /// The contained color won; only undo is accepted.
    GameOver(Color),
}

/// Reasons a request was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("illegal move: {from}{to}")]
    IllegalMove { from: Square, to: Square },

    #[error("no piece of the side to move on {0}")]
    EmptySelection(Square),

    #[error("no piece is selected")]
    NoSelection,

    #[error("game is over: {0} won by checkmate")]
    GameOver(Color),

    #[error("nothing to undo")]
    NoHistory,

    /// A king disappeared or a validated move had no piece to move.
    /// Correct validation never produces this.
    #[error("internal consistency failure: {0}")]
    InvariantViolation(&'static str),
}

/// Outcome of a move request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveResult {
    Applied,
    /// A castling move; the rook travelled between the two squares.
    AppliedWithCastle { rook_from: Square, rook_to: Square },
    /// Nothing changed.
    Rejected(GameError),
    /// The move was applied and mated the opponent. Holds the winner.
    Checkmate(Color),
}

impl MoveResult {
    /// Returns true if the move was committed.
    pub fn is_applied(&self) -> bool {
        !matches!(self, MoveResult::Rejected(_))
    }

    /// Converts a rejection into an `Err`.
    pub fn into_result(self) -> Result<MoveResult, GameError> {
        match self {
            MoveResult::Rejected(err) => Err(err),
            other => Ok(other),
        }
    }
}

/// Outcome of an undo request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UndoResult {
    Restored,
    NoHistory,
}

impl UndoResult {
    pub fn into_result(self) -> Result<(), GameError> {
        match self {
            UndoResult::Restored => Ok(()),
            UndoResult::NoHistory => Err(GameError::NoHistory),
        }
    }
}

/// Read-only projection of the game for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameView {
    pub board: Board,
    pub side_to_move: Color,
    pub castling: CastlingRights,
    pub status: GameStatus,
    pub phase: Phase,
    /// The side to move's king square, when it is in check.
    pub checked_king: Option<Square>,
}

/// A game in progress with undo history.
#[derive(Debug, Clone)]
pub struct Game {
    rules: Rules,
    position: Position,
    status: GameStatus,
    selected: Option<Square>,
    history: History,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a game from the starting position with default rules.
    pub fn new() -> Self {
        Self::with_config(RulesConfig::default())
    }

    /// Creates a game from the starting position.
    pub fn with_config(config: RulesConfig) -> Self {
        Game {
            rules: Rules::new(config),
            position: Position::startpos(),
            status: GameStatus::InProgress,
            selected: None,
            history: History::new(),
        }
    }

    /// Creates a game from a FEN string.
    ///
    /// If the side to move is already mated the game starts over.
    pub fn from_fen(fen: &str, config: RulesConfig) -> Result<Self, FenError> {
        let mut game = Self::with_config(config);
        game.load_fen(fen)?;
        Ok(game)
    }

    /// Resets to the starting position, keeping the rules.
    pub fn new_game(&mut self) {
        self.reset(Position::startpos());
        tracing::info!("New game started");
    }

    /// Replaces the current game with the position described by `fen`.
    ///
    /// On error the current game is kept.
    pub fn load_fen(&mut self, fen: &str) -> Result<(), FenError> {
        let position = Position::from_fen(fen)?;
        for color in Color::ALL {
            if position.board.find_king(color).is_none() {
                tracing::warn!("Loaded position has no {} king", color);
            }
        }
        self.reset(position);
        tracing::info!("Loaded position {}", fen);
        Ok(())
    }

    fn reset(&mut self, position: Position) {
        self.status = if self.rules.is_checkmate(&position) {
            GameStatus::Checkmate(position.side_to_move.opposite())
        } else {
            GameStatus::InProgress
        };
        self.position = position;
        self.selected = None;
        self.history.clear();
    }

    pub fn config(&self) -> RulesConfig {
        self.rules.config()
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn board(&self) -> &Board {
        &self.position.board
    }

    pub fn side_to_move(&self) -> Color {
        self.position.side_to_move
    }

    pub fn castling(&self) -> CastlingRights {
        self.position.castling
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn phase(&self) -> Phase {
        match (self.status, self.selected) {
            (GameStatus::Checkmate(winner), _) => Phase::GameOver(winner),
            (GameStatus::InProgress, Some(sq)) => Phase::PieceSelected(sq),
            (GameStatus::InProgress, None) => Phase::AwaitingSelection,
        }
    }

    /// Returns the winner if the game has ended.
    pub fn result(&self) -> Option<Color> {
        match self.status {
            GameStatus::Checkmate(winner) => Some(winner),
            GameStatus::InProgress => None,
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.result().is_some()
    }

    /// Returns true if the side to move is in check.
    pub fn is_check(&self) -> bool {
        is_in_check(&self.position.board, self.position.side_to_move)
    }

    /// Returns the side to move's king square when it is in check.
    pub fn checked_king(&self) -> Option<Square> {
        if self.is_check() {
            self.position.board.find_king(self.position.side_to_move)
        } else {
            None
        }
    }

    /// Number of committed moves that can be undone.
    pub fn ply_count(&self) -> usize {
        self.history.len()
    }

    /// Committed moves, oldest first.
    pub fn move_history(&self) -> impl Iterator<Item = Move> + '_ {
        self.history.moves()
    }

    pub fn to_fen(&self) -> String {
        self.position.to_fen()
    }

    /// Returns the read-only projection used for rendering.
    pub fn current_state(&self) -> GameView {
        GameView {
            board: self.position.board.clone(),
            side_to_move: self.position.side_to_move,
            castling: self.position.castling,
            status: self.status,
            phase: self.phase(),
            checked_king: self.checked_king(),
        }
    }

    /// Returns the legal destinations of the piece on `sq`, in square order.
    ///
    /// Empty if `sq` holds no piece of the side to move or the game is over.
    pub fn legal_destinations(&self, sq: Square) -> Vec<Square> {
        if self.is_game_over() {
            return Vec::new();
        }
        self.rules.legal_destinations(&self.position, sq)
    }

    /// Like [`legal_destinations`](Self::legal_destinations), with each
    /// destination classified as quiet, capture or castle.
    pub fn legal_moves(&self, sq: Square) -> Vec<LegalMove> {
        if self.is_game_over() {
            return Vec::new();
        }
        self.rules.legal_moves_from(&self.position, sq)
    }

    /// Every legal move for the side to move.
    pub fn all_legal_moves(&self) -> Vec<Move> {
        if self.is_game_over() {
            return Vec::new();
        }
        self.rules.legal_moves(&self.position)
    }

    /// Selects the piece on `sq` and returns where it may go.
    ///
    /// A refused selection keeps any previous one.
    pub fn select_square(&mut self, sq: Square) -> Result<Vec<LegalMove>, GameError> {
        if let GameStatus::Checkmate(winner) = self.status {
            return Err(GameError::GameOver(winner));
        }
        let owned = self
            .position
            .board
            .piece_at(sq)
            .is_some_and(|piece| piece.is(self.position.side_to_move));
        if !owned {
            tracing::debug!("Refused selection of {}", sq);
            return Err(GameError::EmptySelection(sq));
        }

        self.selected = Some(sq);
        Ok(self.rules.legal_moves_from(&self.position, sq))
    }

    /// Moves the selected piece to `to`. The selection is consumed whatever
    /// the outcome.
    pub fn attempt_selected_move(&mut self, to: Square) -> MoveResult {
        if let GameStatus::Checkmate(winner) = self.status {
            return MoveResult::Rejected(GameError::GameOver(winner));
        }
        match self.selected {
            Some(from) => self.attempt_move(from, to),
            None => MoveResult::Rejected(GameError::NoSelection),
        }
    }

    /// Plays `from` → `to` for the side to move if it is legal.
    pub fn attempt_move(&mut self, from: Square, to: Square) -> MoveResult {
        if let GameStatus::Checkmate(winner) = self.status {
            return MoveResult::Rejected(GameError::GameOver(winner));
        }
        self.selected = None;

        let us = self.position.side_to_move;
        if !self
            .position
            .board
            .piece_at(from)
            .is_some_and(|piece| piece.is(us))
        {
            tracing::debug!("Rejected {}{}: no {} piece on {}", from, to, us, from);
            return MoveResult::Rejected(GameError::EmptySelection(from));
        }
        if !self.rules.is_legal(&self.position, from, to) {
            tracing::debug!("Rejected illegal move {}{}", from, to);
            return MoveResult::Rejected(GameError::IllegalMove { from, to });
        }

        match self.commit(Move::new(from, to)) {
            Ok(result) => result,
            Err(err) => MoveResult::Rejected(err),
        }
    }

    /// Plays a move given in coordinate notation (e.g. "e2e4").
    pub fn attempt_coordinate(&mut self, text: &str) -> Option<MoveResult> {
        let m = Move::from_coordinate(text)?;
        Some(self.attempt_move(m.from, m.to))
    }

    /// Applies an already validated move.
    ///
    /// The next position is built completely before anything live changes,
    /// so an error here leaves the game as it was.
    fn commit(&mut self, m: Move) -> Result<MoveResult, GameError> {
        let Played {
            position: next,
            moved,
            captured,
            rook_shift,
        } = self
            .position
            .play(m)
            .ok_or(GameError::InvariantViolation("validated move has no piece to move"))?;

        for color in Color::ALL {
            let had_king = self.position.board.find_king(color).is_some();
            if had_king && next.board.find_king(color).is_none() {
                tracing::error!("Move {} would remove the {} king; not committed", m, color);
                return Err(GameError::InvariantViolation("king removed from the board"));
            }
        }

        let mover = self.position.side_to_move;
        let previous = std::mem::replace(&mut self.position, next);
        self.history.push(Snapshot {
            position: previous,
            status: self.status,
            played: m,
        });
        tracing::debug!(
            "{} played {} {}{}",
            mover,
            moved.kind,
            m,
            captured.map_or(String::new(), |p| format!(" capturing {}", p.kind))
        );

        if self.rules.is_checkmate(&self.position) {
            self.status = GameStatus::Checkmate(mover);
            tracing::info!("Checkmate: {} wins after {}", mover, m);
            return Ok(MoveResult::Checkmate(mover));
        }

        Ok(match rook_shift {
            Some((rook_from, rook_to)) => MoveResult::AppliedWithCastle { rook_from, rook_to },
            None => MoveResult::Applied,
        })
    }

    /// Takes back the most recent move, including a mating one.
    pub fn undo(&mut self) -> UndoResult {
        let Some(snapshot) = self.history.pop() else {
            tracing::debug!("Undo requested with empty history");
            return UndoResult::NoHistory;
        };
        tracing::debug!("Undid {}", snapshot.played);
        self.position = snapshot.position;
        self.status = snapshot.status;
        self.selected = None;
        UndoResult::Restored
    }
}
