//! Mailbox board: one optional piece per square.

use chess_core::{Color, Fen, Piece, PieceKind, Square};
use std::fmt;

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// An 8x8 grid of optional pieces.
///
/// The board is a plain container: it never checks whether a placement is
/// legal. Cloning is a flat 64-cell copy, which is what trial moves use.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [Option<Piece>; 64],
}

impl Board {
    /// Creates a board with no pieces.
    pub const fn empty() -> Self {
        Board {
            squares: [None; 64],
        }
    }

    /// Creates the standard starting arrangement.
    pub fn startpos() -> Self {
        let mut board = Board::empty();
        for (col, kind) in BACK_RANK.into_iter().enumerate() {
            let col = col as u8;
            for color in Color::ALL {
                let pawn_row = color.pawn_start_row();
                board.place(Square::at(color.back_row(), col), Some(Piece::new(kind, color)));
                board.place(
                    Square::at(pawn_row, col),
                    Some(Piece::new(PieceKind::Pawn, color)),
                );
            }
        }
        board
    }

    /// Creates a board from a parsed FEN placement.
    pub const fn from_placement(squares: [Option<Piece>; 64]) -> Self {
        Board { squares }
    }

    /// Returns the raw placement, indexed by [`Square::index`].
    pub const fn placement(&self) -> &[Option<Piece>; 64] {
        &self.squares
    }

    /// Returns the piece on `sq`, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()]
    }

    /// Returns true if nothing stands on `sq`.
    #[inline]
    pub fn is_vacant(&self, sq: Square) -> bool {
        self.squares[sq.index()].is_none()
    }

    /// Puts `piece` (or nothing) on `sq`, returning the previous occupant.
    #[inline]
    pub fn place(&mut self, sq: Square, piece: Option<Piece>) -> Option<Piece> {
        std::mem::replace(&mut self.squares[sq.index()], piece)
    }

    /// Moves whatever stands on `from` to `to`, returning what was captured.
    ///
    /// No castling or other side effects: this is the primitive trial moves
    /// are built from.
    pub fn relocate(&mut self, from: Square, to: Square) -> Option<Piece> {
        let moving = self.place(from, None);
        self.place(to, moving)
    }

    /// Returns the square of `color`'s king.
    ///
    /// `None` means the king has been removed, which correct move validation
    /// never allows.
    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces(color)
            .find(|(_, piece)| piece.kind == PieceKind::King)
            .map(|(sq, _)| sq)
    }

    /// Iterates over the pieces of `color` in square order.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| match self.piece_at(sq) {
            Some(piece) if piece.color == color => Some((sq, piece)),
            _ => None,
        })
    }

    /// Counts the pieces of `color`.
    pub fn count(&self, color: Color) -> usize {
        self.pieces(color).count()
    }

    /// Returns the FEN piece placement field for this board.
    pub fn to_placement_fen(&self) -> String {
        Fen::placement_string(&self.squares)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::startpos()
    }
}

/// Renders one line per row, Black's back rank first, `.` for empty squares.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..8u8 {
            for col in 0..8u8 {
                let c = self
                    .piece_at(Square::at(row, col))
                    .map_or('.', Piece::to_fen_char);
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({})", self.to_placement_fen())
    }
}
