//! FEN (Forsyth-Edwards Notation) parsing and serialization.
//!
//! Only the fields the rules engine tracks are kept: piece placement, the
//! side to move and castling availability. The en passant square and the
//! move clocks are validated when present and then dropped; serialization
//! always writes `- 0 1` for them.

use crate::{CastleSide, Color, Piece, Square};
use thiserror::Error;

/// Errors that can occur when parsing FEN strings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FenError {
    #[error("invalid FEN: expected 2 to 6 fields, got {0}")]
    InvalidPartCount(usize),

    #[error("invalid piece placement: {0}")]
    InvalidPiecePlacement(String),

    #[error("invalid active color: expected 'w' or 'b', got '{0}'")]
    InvalidActiveColor(String),

    #[error("invalid castling rights: {0}")]
    InvalidCastlingRights(String),

    #[error("invalid en passant square: {0}")]
    InvalidEnPassantSquare(String),

    #[error("invalid move counter: {0}")]
    InvalidMoveCounter(String),
}

/// A parsed FEN record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fen {
    /// Occupant of every square, indexed by [`Square::index`].
    pub placement: [Option<Piece>; 64],
    pub side_to_move: Color,
    /// Castling availability in `KQkq` order.
    pub castling: Vec<(Color, CastleSide)>,
}

impl Fen {
    /// The standard starting position FEN.
    pub const STARTPOS: &'static str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    /// Parses a FEN string.
    pub fn parse(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if !(2..=6).contains(&parts.len()) {
            return Err(FenError::InvalidPartCount(parts.len()));
        }

        let placement = parse_placement(parts[0])?;

        let side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(FenError::InvalidActiveColor(other.to_string())),
        };

        let castling = match parts.get(2) {
            Some(field) => parse_castling(field)?,
            None => Vec::new(),
        };

        if let Some(ep) = parts.get(3) {
            validate_en_passant(ep)?;
        }
        for counter in parts.iter().skip(4) {
            counter
                .parse::<u32>()
                .map_err(|_| FenError::InvalidMoveCounter(counter.to_string()))?;
        }

        Ok(Fen {
            placement,
            side_to_move,
            castling,
        })
    }

    /// Serializes the piece placement field alone.
    pub fn placement_string(placement: &[Option<Piece>; 64]) -> String {
        let mut out = String::new();
        for row in 0..8u8 {
            let mut empty = 0;
            for col in 0..8u8 {
                match placement[Square::at(row, col).index()] {
                    Some(piece) => {
                        if empty > 0 {
                            out.push_str(&empty.to_string());
                            empty = 0;
                        }
                        out.push(piece.to_fen_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                out.push_str(&empty.to_string());
            }
            if row < 7 {
                out.push('/');
            }
        }
        out
    }

    /// Converts the record back to a six-field FEN string.
    pub fn to_fen(&self) -> String {
        let side = match self.side_to_move {
            Color::White => 'w',
            Color::Black => 'b',
        };
        let mut castling: String = self
            .castling
            .iter()
            .map(|&(color, side)| castle_char(color, side))
            .collect();
        if castling.is_empty() {
            castling.push('-');
        }
        format!(
            "{} {} {} - 0 1",
            Self::placement_string(&self.placement),
            side,
            castling
        )
    }
}

impl Default for Fen {
    fn default() -> Self {
        Self::parse(Self::STARTPOS).expect("STARTPOS is valid")
    }
}

fn castle_char(color: Color, side: CastleSide) -> char {
    match (color, side) {
        (Color::White, CastleSide::KingSide) => 'K',
        (Color::White, CastleSide::QueenSide) => 'Q',
        (Color::Black, CastleSide::KingSide) => 'k',
        (Color::Black, CastleSide::QueenSide) => 'q',
    }
}

fn parse_placement(field: &str) -> Result<[Option<Piece>; 64], FenError> {
    let rows: Vec<&str> = field.split('/').collect();
    if rows.len() != 8 {
        return Err(FenError::InvalidPiecePlacement(format!(
            "expected 8 ranks, got {}",
            rows.len()
        )));
    }

    let mut placement = [None; 64];
    // FEN lists rank 8 first, which is row 0.
    for (row, text) in rows.iter().enumerate() {
        let mut col = 0usize;
        for c in text.chars() {
            if let Some(skip) = c.to_digit(10).filter(|d| (1..=8).contains(d)) {
                col += skip as usize;
            } else if let Some(piece) = Piece::from_fen_char(c) {
                if col < 8 {
                    placement[row * 8 + col] = Some(piece);
                }
                col += 1;
            } else {
                return Err(FenError::InvalidPiecePlacement(format!(
                    "invalid character '{}' in rank {}",
                    c,
                    8 - row
                )));
            }
        }
        if col != 8 {
            return Err(FenError::InvalidPiecePlacement(format!(
                "rank {} has {} squares, expected 8",
                8 - row,
                col
            )));
        }
    }

    Ok(placement)
}

fn parse_castling(field: &str) -> Result<Vec<(Color, CastleSide)>, FenError> {
    if field == "-" {
        return Ok(Vec::new());
    }

    let mut rights = Vec::new();
    for c in field.chars() {
        let right = match c {
            'K' => (Color::White, CastleSide::KingSide),
            'Q' => (Color::White, CastleSide::QueenSide),
            'k' => (Color::Black, CastleSide::KingSide),
            'q' => (Color::Black, CastleSide::QueenSide),
            other => {
                return Err(FenError::InvalidCastlingRights(format!(
                    "invalid character '{}'",
                    other
                )))
            }
        };
        if rights.contains(&right) {
            return Err(FenError::InvalidCastlingRights(format!(
                "duplicate character '{}'",
                c
            )));
        }
        rights.push(right);
    }

    Ok(rights)
}

fn validate_en_passant(ep: &str) -> Result<(), FenError> {
    if ep == "-" {
        return Ok(());
    }

    match Square::from_algebraic(ep) {
        Some(sq) if sq.row() == 2 || sq.row() == 5 => Ok(()),
        _ => Err(FenError::InvalidEnPassantSquare(ep.to_string())),
    }
}
