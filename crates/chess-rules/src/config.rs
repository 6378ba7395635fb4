//! Rule configuration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// How strictly castling is checked.
///
/// Both policies require the king on its home square, empty squares up to
/// the corner, a rook in the corner, and a landing square that is not
/// attacked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CastlingPolicy {
    /// Also requires that neither the king nor that rook has moved, that the
    /// king is not in check, and that the square it crosses is not attacked.
    #[default]
    Standard,
    /// Geometry only; move history and attacked transit squares are ignored.
    Legacy,
}

/// Error returned when a castling policy name is not recognized.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown castling policy '{0}', expected 'standard' or 'legacy'")]
pub struct ParsePolicyError(String);

impl FromStr for CastlingPolicy {
    type Err = ParsePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "standard" => Ok(CastlingPolicy::Standard),
            "legacy" => Ok(CastlingPolicy::Legacy),
            _ => Err(ParsePolicyError(s.to_string())),
        }
    }
}

impl fmt::Display for CastlingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CastlingPolicy::Standard => write!(f, "standard"),
            CastlingPolicy::Legacy => write!(f, "legacy"),
        }
    }
}

/// Options that change which moves are legal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct RulesConfig {
    pub castling: CastlingPolicy,
}

impl RulesConfig {
    /// The geometry-only castling rules.
    pub const LEGACY: RulesConfig = RulesConfig {
        castling: CastlingPolicy::Legacy,
    };
}
