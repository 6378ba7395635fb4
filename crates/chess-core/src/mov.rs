//! Move representation.

use crate::Square;
use std::fmt;

/// Which corner a castling king heads toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    /// Toward column 7 (O-O).
    KingSide,
    /// Toward column 0 (O-O-O).
    QueenSide,
}

impl CastleSide {
    pub const ALL: [CastleSide; 2] = [CastleSide::KingSide, CastleSide::QueenSide];

    /// Classifies a two-column king step by its column delta.
    #[inline]
    pub const fn from_king_step(dc: i8) -> Option<Self> {
        match dc {
            2 => Some(CastleSide::KingSide),
            -2 => Some(CastleSide::QueenSide),
            _ => None,
        }
    }

    /// Column of the rook's original corner.
    #[inline]
    pub const fn rook_from_col(self) -> u8 {
        match self {
            CastleSide::KingSide => 7,
            CastleSide::QueenSide => 0,
        }
    }

    /// Column the rook lands on, the square the king crosses.
    #[inline]
    pub const fn rook_to_col(self) -> u8 {
        match self {
            CastleSide::KingSide => 5,
            CastleSide::QueenSide => 3,
        }
    }

    /// Columns that must be empty between king and corner.
    #[inline]
    pub const fn between_cols(self) -> &'static [u8] {
        match self {
            CastleSide::KingSide => &[5, 6],
            CastleSide::QueenSide => &[1, 2, 3],
        }
    }
}

impl fmt::Display for CastleSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CastleSide::KingSide => write!(f, "O-O"),
            CastleSide::QueenSide => write!(f, "O-O-O"),
        }
    }
}

/// A request to move whatever stands on `from` to `to`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Move { from, to }
    }

    /// Row delta from source to destination.
    #[inline]
    pub const fn dr(self) -> i8 {
        self.to.row() as i8 - self.from.row() as i8
    }

    /// Column delta from source to destination.
    #[inline]
    pub const fn dc(self) -> i8 {
        self.to.col() as i8 - self.from.col() as i8
    }

    /// Returns the coordinate notation for this move (e.g., "e2e4").
    pub fn to_coordinate(self) -> String {
        format!("{}{}", self.from, self.to)
    }

    /// Parses a move from coordinate notation.
    pub fn from_coordinate(s: &str) -> Option<Self> {
        if s.len() != 4 || !s.is_ascii() {
            return None;
        }
        let from = Square::from_algebraic(&s[0..2])?;
        let to = Square::from_algebraic(&s[2..4])?;
        Some(Move::new(from, to))
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({})", self.to_coordinate())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_coordinate())
    }
}
