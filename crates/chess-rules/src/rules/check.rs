//! Check detection and the trial-move safety filter.

use super::movement::is_pseudo_legal;
use crate::Board;
use chess_core::{Color, Square};

/// Returns true if `color`'s king is attacked by any opposing piece.
///
/// A board without that king is reported as not in check.
pub fn is_in_check(board: &Board, color: Color) -> bool {
    let Some(king) = board.find_king(color) else {
        return false;
    };
    board
        .pieces(color.opposite())
        .any(|(sq, _)| is_pseudo_legal(board, sq, king))
}

/// Returns true if moving the piece on `from` to `to` leaves `mover`'s king
/// out of check.
///
/// The move is played on a scratch copy as a plain relocation; the live
/// board is never touched. Callers are expected to have checked
/// pseudo-legality already.
pub fn is_safe(board: &Board, from: Square, to: Square, mover: Color) -> bool {
    let mut trial = board.clone();
    trial.relocate(from, to);
    !is_in_check(&trial, mover)
}
