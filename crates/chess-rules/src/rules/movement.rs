//! Per-piece movement geometry.
//!
//! Everything here is pseudo-legal: a move may still leave the mover's own
//! king attacked. See [`super::check::is_safe`] for that filter.

use crate::Board;
use chess_core::{CastleSide, Color, Move, Piece, PieceKind, Square};

/// Returns true if the piece on `from` may move to `to` by its movement rules.
///
/// Fails closed: an empty source square, a destination held by a piece of
/// the same color, or any displacement no rule recognizes is rejected.
pub fn is_pseudo_legal(board: &Board, from: Square, to: Square) -> bool {
    let Some(piece) = board.piece_at(from) else {
        return false;
    };
    if board.piece_at(to).is_some_and(|target| target.color == piece.color) {
        return false;
    }

    let m = Move::new(from, to);
    let (dr, dc) = (m.dr(), m.dc());
    match piece.kind {
        PieceKind::Pawn => pawn_move(board, piece.color, from, to, dr, dc),
        PieceKind::Knight => matches!((dr.abs(), dc.abs()), (1, 2) | (2, 1)),
        PieceKind::Bishop => dr.abs() == dc.abs() && path_clear(board, from, to),
        PieceKind::Rook => (dr == 0 || dc == 0) && path_clear(board, from, to),
        PieceKind::Queen => {
            (dr == 0 || dc == 0 || dr.abs() == dc.abs()) && path_clear(board, from, to)
        }
        PieceKind::King => {
            (dr.abs() <= 1 && dc.abs() <= 1) || castle_side(board, from, to).is_some()
        }
    }
}

/// Iterates over every square the piece on `from` could pseudo-legally reach.
pub fn pseudo_legal_destinations(board: &Board, from: Square) -> impl Iterator<Item = Square> + '_ {
    Square::all().filter(move |&to| is_pseudo_legal(board, from, to))
}

/// Recognizes a castling king move and returns which side it castles toward.
///
/// Checks geometry only: a king on its home square steps two columns along
/// its back rank, every square between it and the corner is empty, and a rook
/// stands in that corner. The rook's color is not checked.
pub fn castle_side(board: &Board, from: Square, to: Square) -> Option<CastleSide> {
    let king = board.piece_at(from)?;
    if king.kind != PieceKind::King || from != home_king_square(king.color) {
        return None;
    }
    if to.row() != from.row() {
        return None;
    }

    let side = CastleSide::from_king_step(Move::new(from, to).dc())?;
    let row = from.row();
    let between_empty = side
        .between_cols()
        .iter()
        .all(|&col| board.is_vacant(Square::at(row, col)));
    let corner = board.piece_at(Square::at(row, side.rook_from_col()));

    if between_empty && corner.is_some_and(|p| p.kind == PieceKind::Rook) {
        Some(side)
    } else {
        None
    }
}

/// Where `color`'s king starts the game.
pub const fn home_king_square(color: Color) -> Square {
    Square::at(color.back_row(), 4)
}

fn pawn_move(board: &Board, color: Color, from: Square, to: Square, dr: i8, dc: i8) -> bool {
    let dir = color.pawn_direction();
    let target: Option<Piece> = board.piece_at(to);

    if dc == 0 && dr == dir {
        return target.is_none();
    }
    if dc == 0 && dr == 2 * dir && from.row() == color.pawn_start_row() {
        let middle = from.offset(dir, 0);
        return target.is_none() && middle.is_some_and(|sq| board.is_vacant(sq));
    }
    if dc.abs() == 1 && dr == dir {
        // The same-color case was already rejected, so any occupant is an enemy.
        return target.is_some();
    }
    false
}

/// Walks one step at a time from `from` toward `to`, requiring every square
/// strictly between them to be empty.
///
/// Callers guarantee the two squares share a row, column or diagonal.
fn path_clear(board: &Board, from: Square, to: Square) -> bool {
    let m = Move::new(from, to);
    let (step_r, step_c) = (m.dr().signum(), m.dc().signum());
    if step_r == 0 && step_c == 0 {
        return false;
    }

    let mut current = from.offset(step_r, step_c);
    while let Some(sq) = current {
        if sq == to {
            return true;
        }
        if !board.is_vacant(sq) {
            return false;
        }
        current = sq.offset(step_r, step_c);
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    fn board(fen: &str) -> Board {
        Position::from_fen(fen).unwrap().board
    }

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).unwrap()
    }

    fn destinations(board: &Board, from: &str) -> Vec<String> {
        pseudo_legal_destinations(board, sq(from))
            .map(Square::to_algebraic)
            .collect()
    }

    #[test]
    fn empty_source_is_rejected() {
        let b = Board::startpos();
        assert!(!is_pseudo_legal(&b, sq("e4"), sq("e5")));
    }

    #[test]
    fn same_color_target_is_rejected() {
        let b = Board::startpos();
        assert!(!is_pseudo_legal(&b, sq("d1"), sq("d2")));
        assert!(!is_pseudo_legal(&b, sq("e1"), sq("e1")));
    }

    #[test]
    fn pawn_single_and_double_step() {
        let b = Board::startpos();
        let white = Square::at(6, 3);
        assert!(is_pseudo_legal(&b, white, Square::at(5, 3)));
        assert!(is_pseudo_legal(&b, white, Square::at(4, 3)));
        assert!(!is_pseudo_legal(&b, white, Square::at(3, 3)));
        assert!(!is_pseudo_legal(&b, white, Square::at(7, 3)));

        let black = Square::at(1, 3);
        assert!(is_pseudo_legal(&b, black, Square::at(2, 3)));
        assert!(is_pseudo_legal(&b, black, Square::at(3, 3)));
    }

    #[test]
    fn pawn_double_step_needs_clear_middle() {
        let b = board("4k3/8/8/8/8/3n4/3P4/4K3 w - - 0 1");
        assert!(!is_pseudo_legal(&b, sq("d2"), sq("d3")));
        assert!(!is_pseudo_legal(&b, sq("d2"), sq("d4")));
    }

    #[test]
    fn pawn_double_step_only_from_start_row() {
        let b = board("4k3/8/8/8/8/3P4/8/4K3 w - - 0 1");
        assert!(is_pseudo_legal(&b, sq("d3"), sq("d4")));
        assert!(!is_pseudo_legal(&b, sq("d3"), sq("d5")));
    }

    #[test]
    fn pawn_diagonal_only_captures() {
        let quiet = Board::startpos();
        assert!(!is_pseudo_legal(&quiet, Square::at(6, 3), Square::at(5, 4)));

        let b = board("4k3/8/8/8/8/4p3/3P4/4K3 w - - 0 1");
        assert!(is_pseudo_legal(&b, Square::at(6, 3), Square::at(5, 4)));
        assert!(!is_pseudo_legal(&b, Square::at(6, 3), Square::at(5, 2)));
        // Pawns never capture straight ahead.
        let blocked = board("4k3/8/8/8/8/3p4/3P4/4K3 w - - 0 1");
        assert!(!is_pseudo_legal(&blocked, sq("d2"), sq("d3")));
    }

    #[test]
    fn pawn_never_moves_backward() {
        let b = board("4k3/8/8/8/3p4/8/8/4K3 b - - 0 1");
        assert!(is_pseudo_legal(&b, sq("d4"), sq("d3")));
        assert!(!is_pseudo_legal(&b, sq("d4"), sq("d5")));
    }

    #[test]
    fn rook_is_blocked_by_own_piece() {
        let b = board("4k3/8/8/8/8/8/8/R2B3K w - - 0 1");
        let rook = Square::at(7, 0);
        assert!(is_pseudo_legal(&b, rook, Square::at(7, 1)));
        assert!(is_pseudo_legal(&b, rook, Square::at(7, 2)));
        for col in 3..8 {
            assert!(!is_pseudo_legal(&b, rook, Square::at(7, col)));
        }
        assert!(is_pseudo_legal(&b, rook, Square::at(0, 0)));
    }

    #[test]
    fn rook_captures_first_enemy_only() {
        let b = board("4k3/8/8/8/r7/8/8/R6K w - - 0 1");
        assert!(is_pseudo_legal(&b, sq("a1"), sq("a4")));
        assert!(!is_pseudo_legal(&b, sq("a1"), sq("a5")));
        assert!(!is_pseudo_legal(&b, sq("a1"), sq("b2")));
    }

    #[test]
    fn bishop_diagonals() {
        let b = board("4k3/8/8/8/8/8/8/2B1K3 w - - 0 1");
        assert_eq!(
            destinations(&b, "c1"),
            vec!["h6", "g5", "f4", "a3", "e3", "b2", "d2"]
        );
    }

    #[test]
    fn queen_combines_rook_and_bishop() {
        let b = board("4k3/8/8/8/3Q4/8/8/4K3 w - - 0 1");
        assert_eq!(destinations(&b, "d4").len(), 27);
        assert!(!is_pseudo_legal(&b, sq("d4"), sq("e6")));
    }

    #[test]
    fn knight_jumps() {
        let b = Board::startpos();
        assert_eq!(destinations(&b, "g1"), vec!["f3", "h3"]);
        assert!(!is_pseudo_legal(&b, sq("g1"), sq("e2")));
    }

    #[test]
    fn king_single_steps() {
        let b = board("4k3/8/8/8/4K3/8/8/8 w - - 0 1");
        assert_eq!(destinations(&b, "e4").len(), 8);
        assert!(!is_pseudo_legal(&b, sq("e4"), sq("e6")));
    }

    #[test]
    fn castling_geometry() {
        let b = board("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        assert_eq!(castle_side(&b, Square::E1, sq("g1")), Some(CastleSide::KingSide));
        assert_eq!(castle_side(&b, Square::E1, sq("c1")), Some(CastleSide::QueenSide));
        assert_eq!(castle_side(&b, Square::E8, sq("g8")), Some(CastleSide::KingSide));
        assert!(is_pseudo_legal(&b, Square::E1, sq("g1")));
        assert!(is_pseudo_legal(&b, Square::E1, sq("c1")));
    }

    #[test]
    fn castling_needs_empty_path_and_corner_rook() {
        let b = board("4k3/8/8/8/8/8/8/RN2K1NR w KQ - 0 1");
        assert_eq!(castle_side(&b, Square::E1, sq("g1")), None);
        assert_eq!(castle_side(&b, Square::E1, sq("c1")), None);

        let no_rook = board("4k3/8/8/8/8/8/8/4K2B w K - 0 1");
        assert_eq!(castle_side(&no_rook, Square::E1, sq("g1")), None);
    }

    #[test]
    fn castling_needs_king_on_home_square() {
        let b = board("4k3/8/8/8/8/8/8/3K3R w - - 0 1");
        assert_eq!(castle_side(&b, sq("d1"), sq("f1")), None);
        assert!(!is_pseudo_legal(&b, sq("d1"), sq("f1")));
    }
}
