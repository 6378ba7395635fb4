//! Move legality.
//!
//! Legality is layered: [`movement`] decides what a piece's geometry allows,
//! [`check`] rejects anything that leaves the mover's king attacked, and
//! [`Rules`] adds the castling policy and the searches built on top (legal
//! destination lists, "any legal move", checkmate).

pub mod check;
pub mod movement;

use crate::{CastlingPolicy, Position, RulesConfig};
use chess_core::{CastleSide, Move, Square};
use check::{is_in_check, is_safe};
use movement::{castle_side, is_pseudo_legal};

/// How a legal destination relates to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    /// Onto an empty square.
    Quiet,
    /// Onto an opposing piece.
    Capture,
    /// A castling king move.
    Castle(CastleSide),
}

/// A legal destination for a selected piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LegalMove {
    pub to: Square,
    pub kind: MoveKind,
}

/// Legality under a given [`RulesConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rules {
    config: RulesConfig,
}

impl Rules {
    pub const fn new(config: RulesConfig) -> Self {
        Rules { config }
    }

    pub const fn config(&self) -> RulesConfig {
        self.config
    }

    /// Returns true if the side to move may play `from` → `to`.
    ///
    /// The piece must belong to the side to move, obey its movement rules,
    /// not leave its own king in check, and pass the castling policy when
    /// the move castles.
    pub fn is_legal(&self, position: &Position, from: Square, to: Square) -> bool {
        let us = position.side_to_move;
        let board = &position.board;
        board.piece_at(from).is_some_and(|piece| piece.is(us))
            && is_pseudo_legal(board, from, to)
            && is_safe(board, from, to, us)
            && self.castle_permitted(position, from, to)
    }

    /// Returns every legal destination of the piece on `from`, in square order.
    ///
    /// Empty when `from` does not hold a piece of the side to move.
    pub fn legal_destinations(&self, position: &Position, from: Square) -> Vec<Square> {
        Square::all()
            .filter(|&to| self.is_legal(position, from, to))
            .collect()
    }

    /// Like [`legal_destinations`](Self::legal_destinations), with each
    /// destination classified.
    pub fn legal_moves_from(&self, position: &Position, from: Square) -> Vec<LegalMove> {
        self.legal_destinations(position, from)
            .into_iter()
            .map(|to| {
                let kind = if let Some(side) = castle_side(&position.board, from, to) {
                    MoveKind::Castle(side)
                } else if position.board.piece_at(to).is_some() {
                    MoveKind::Capture
                } else {
                    MoveKind::Quiet
                };
                LegalMove { to, kind }
            })
            .collect()
    }

    /// Returns every legal move for the side to move.
    pub fn legal_moves(&self, position: &Position) -> Vec<Move> {
        position
            .board
            .pieces(position.side_to_move)
            .flat_map(|(from, _)| {
                self.legal_destinations(position, from)
                    .into_iter()
                    .map(move |to| Move::new(from, to))
            })
            .collect()
    }

    /// Returns true if the side to move has at least one legal move.
    ///
    /// Stops at the first one found.
    pub fn has_legal_move(&self, position: &Position) -> bool {
        position
            .board
            .pieces(position.side_to_move)
            .any(|(from, _)| Square::all().any(|to| self.is_legal(position, from, to)))
    }

    /// Returns true if the side to move is in check with no legal escape.
    pub fn is_checkmate(&self, position: &Position) -> bool {
        is_in_check(&position.board, position.side_to_move) && !self.has_legal_move(position)
    }

    /// Applies the castling policy to a move that is already pseudo-legal
    /// and safe on its landing square. Non-castling moves always pass.
    fn castle_permitted(&self, position: &Position, from: Square, to: Square) -> bool {
        let Some(side) = castle_side(&position.board, from, to) else {
            return true;
        };
        match self.config.castling {
            CastlingPolicy::Legacy => true,
            CastlingPolicy::Standard => {
                let us = position.side_to_move;
                let crossed = Square::at(from.row(), side.rook_to_col());
                position.castling.has(us, side)
                    && !is_in_check(&position.board, us)
                    && is_safe(&position.board, from, crossed, us)
            }
        }
    }
}
