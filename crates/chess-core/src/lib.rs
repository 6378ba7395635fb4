//! Core types for chess.
//!
//! This crate provides the value types shared by the rules engine and its
//! front ends:
//! - [`Piece`], [`PieceKind`] and [`Color`] for piece representation
//! - [`Square`] for `(row, col)` board coordinates
//! - [`Move`] and [`CastleSide`] for move requests
//! - FEN parsing and serialization

mod color;
mod fen;
mod mov;
mod piece;
mod square;

pub use color::Color;
pub use fen::{Fen, FenError};
pub use mov::{CastleSide, Move};
pub use piece::{Piece, PieceKind};
pub use square::Square;
