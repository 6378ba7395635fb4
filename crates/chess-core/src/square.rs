//! Board square representation.

use std::fmt;

/// A square on the 8x8 board, addressed by `(row, col)`.
///
/// Row 0 is Black's back rank and row 7 is White's, so `(7, 4)` is e1 and
/// `(0, 3)` is d8. Internally the square is stored as `row * 8 + col`, which
/// also gives the total order used when listing squares.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    /// Creates a square from row and column, or `None` if off the board.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row < 8 && col < 8 {
            Some(Square(row * 8 + col))
        } else {
            None
        }
    }

    /// Creates a square from row and column known to be on the board.
    ///
    /// # Panics
    /// Panics if `row` or `col` is greater than 7.
    #[inline]
    pub const fn at(row: u8, col: u8) -> Self {
        assert!(row < 8 && col < 8, "square out of range");
        Square(row * 8 + col)
    }

    /// Creates a square from index (0-63).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 64 {
            Some(Square(index))
        } else {
            None
        }
    }

    /// Iterates over all 64 squares in index order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64u8).map(Square)
    }

    /// Returns the index (0-63).
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.0 / 8
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.0 % 8
    }

    /// Returns the square `dr` rows and `dc` columns away, if it is on the board.
    #[inline]
    pub const fn offset(self, dr: i8, dc: i8) -> Option<Self> {
        let row = self.row() as i8 + dr;
        let col = self.col() as i8 + dc;
        if row < 0 || row > 7 || col < 0 || col > 7 {
            None
        } else {
            Some(Square(row as u8 * 8 + col as u8))
        }
    }

    /// Parses a square from algebraic notation (e.g., "e4").
    pub const fn from_algebraic(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let file = bytes[0].to_ascii_lowercase();
        let rank = bytes[1];
        if file < b'a' || file > b'h' || rank < b'1' || rank > b'8' {
            return None;
        }
        Some(Square((b'8' - rank) * 8 + (file - b'a')))
    }

    /// Returns the algebraic notation for this square.
    pub fn to_algebraic(self) -> String {
        let file = (b'a' + self.col()) as char;
        let rank = (b'8' - self.row()) as char;
        format!("{}{}", file, rank)
    }

    pub const A8: Square = Square(0);
    pub const E8: Square = Square(4);
    pub const H8: Square = Square(7);
    pub const A1: Square = Square(56);
    pub const E1: Square = Square(60);
    pub const H1: Square = Square(63);
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({}, {} = {})", self.row(), self.col(), self.to_algebraic())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}
