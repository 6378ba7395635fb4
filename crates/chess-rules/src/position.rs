//! Board plus the metadata that travels with it.

use crate::rules::movement::castle_side;
use crate::{Board, CastlingRights};
use chess_core::{Color, Fen, FenError, Move, Piece, Square};

/// Everything a move needs to be judged and played: the board, whose turn
/// it is, and what castling is still available.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Position {
    pub board: Board,
    pub side_to_move: Color,
    pub castling: CastlingRights,
}

/// The outcome of playing a move on a [`Position`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Played {
    pub position: Position,
    pub moved: Piece,
    pub captured: Option<Piece>,
    /// Source and destination of the rook, if the move castled.
    pub rook_shift: Option<(Square, Square)>,
}

impl Position {
    /// Creates the standard starting position.
    pub fn startpos() -> Self {
        Position {
            board: Board::startpos(),
            side_to_move: Color::White,
            castling: CastlingRights::ALL,
        }
    }

    /// Creates a position from a FEN string.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let parsed = Fen::parse(fen)?;
        Ok(Position {
            board: Board::from_placement(parsed.placement),
            side_to_move: parsed.side_to_move,
            castling: CastlingRights::from_pairs(&parsed.castling),
        })
    }

    /// Converts the position to a FEN string.
    pub fn to_fen(&self) -> String {
        Fen {
            placement: *self.board.placement(),
            side_to_move: self.side_to_move,
            castling: self.castling.to_pairs(),
        }
        .to_fen()
    }

    /// Plays `m` on a copy of this position and returns the result.
    ///
    /// No legality check happens here. The piece is relocated, a castling
    /// king also brings its corner rook across, castling rights are updated
    /// and the turn passes. Returns `None` if `m.from` is empty.
    pub fn play(&self, m: Move) -> Option<Played> {
        let moved = self.board.piece_at(m.from)?;
        let side = castle_side(&self.board, m.from, m.to);

        let mut next = self.clone();
        let captured = next.board.relocate(m.from, m.to);
        next.castling.update_for_move(moved, m.from, m.to);

        let rook_shift = side.map(|side| {
            let row = m.from.row();
            let rook_from = Square::at(row, side.rook_from_col());
            let rook_to = Square::at(row, side.rook_to_col());
            next.board.relocate(rook_from, rook_to);
            (rook_from, rook_to)
        });

        next.side_to_move = self.side_to_move.opposite();

        Some(Played {
            position: next,
            moved,
            captured,
            rook_shift,
        })
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::startpos()
    }
}
