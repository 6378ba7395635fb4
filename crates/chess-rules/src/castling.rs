//! Castling availability bookkeeping.

use chess_core::{CastleSide, Color, Piece, PieceKind, Square};

/// Castling rights flags, one bit per color and side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CastlingRights(u8);

impl CastlingRights {
    pub const NONE: CastlingRights = CastlingRights(0);
    pub const ALL: CastlingRights = CastlingRights(0b1111);

    const fn flag(color: Color, side: CastleSide) -> u8 {
        let bit = match side {
            CastleSide::KingSide => 0,
            CastleSide::QueenSide => 1,
        };
        1 << (color.index() * 2 + bit)
    }

    /// Builds rights from a list of available (color, side) pairs.
    pub fn from_pairs(pairs: &[(Color, CastleSide)]) -> Self {
        let mut rights = Self::NONE;
        for &(color, side) in pairs {
            rights.0 |= Self::flag(color, side);
        }
        rights
    }

    /// Returns true if `color` may still castle toward `side`.
    #[inline]
    pub const fn has(self, color: Color, side: CastleSide) -> bool {
        self.0 & Self::flag(color, side) != 0
    }

    /// Removes one right.
    #[inline]
    pub fn remove(&mut self, color: Color, side: CastleSide) {
        self.0 &= !Self::flag(color, side);
    }

    /// Removes both rights of a color.
    #[inline]
    pub fn remove_color(&mut self, color: Color) {
        for side in CastleSide::ALL {
            self.remove(color, side);
        }
    }

    /// Returns the remaining rights in `KQkq` order.
    pub fn to_pairs(self) -> Vec<(Color, CastleSide)> {
        Color::ALL
            .into_iter()
            .flat_map(|color| CastleSide::ALL.into_iter().map(move |side| (color, side)))
            .filter(|&(color, side)| self.has(color, side))
            .collect()
    }

    /// Updates the rights after `piece` moved from `from` to `to`.
    ///
    /// A king move forfeits both sides. A rook leaving its home corner
    /// forfeits that side. Anything landing on a home corner removes the
    /// corner owner's right, since their rook was captured there.
    pub fn update_for_move(&mut self, piece: Piece, from: Square, to: Square) {
        match piece.kind {
            PieceKind::King => self.remove_color(piece.color),
            PieceKind::Rook => {
                if let Some(side) = home_corner_side(piece.color, from) {
                    self.remove(piece.color, side);
                }
            }
            _ => {}
        }

        for color in Color::ALL {
            if let Some(side) = home_corner_side(color, to) {
                self.remove(color, side);
            }
        }
    }
}

/// Returns the castle side whose rook starts on `sq` for `color`.
fn home_corner_side(color: Color, sq: Square) -> Option<CastleSide> {
    if sq.row() != color.back_row() {
        return None;
    }
    CastleSide::ALL
        .into_iter()
        .find(|side| side.rook_from_col() == sq.col())
}
