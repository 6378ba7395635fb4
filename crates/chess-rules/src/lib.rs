//! Chess rules engine with undo.
//!
//! This crate provides:
//! - [`Board`] - mailbox board, one optional piece per square
//! - [`Position`] - board plus side to move and [`CastlingRights`]
//! - [`rules`] - pseudo-legal movement, check detection, the trial-move
//!   safety filter and checkmate search
//! - [`Game`] - the select/move/undo state machine front ends drive
//! - [`RulesConfig`] - castling policy selection
//!
//! # Architecture
//!
//! Legality is decided in layers. [`rules::movement`] knows piece geometry
//! and path blocking. [`rules::check`] asks whether any opposing piece could
//! move onto a king, and plays candidate moves on a cloned board to reject
//! those that expose the mover's king. [`Rules`] composes both with the
//! castling policy. [`Game`] is the only thing that mutates live state, and it
//! snapshots the previous position before every commit so undo is a pop.
//!
//! # Example
//!
//! ```
//! use chess_core::Square;
//! use chess_rules::{Game, MoveResult};
//!
//! let mut game = Game::new();
//! let e2 = Square::from_algebraic("e2").unwrap();
//! let e4 = Square::from_algebraic("e4").unwrap();
//! assert!(game.legal_destinations(e2).contains(&e4));
//! assert_eq!(game.attempt_move(e2, e4), MoveResult::Applied);
//! game.undo();
//! assert_eq!(game.ply_count(), 0);
//! ```

mod board;
mod castling;
mod config;
mod game;
mod history;
pub mod perft;
mod position;
pub mod rules;

pub use board::Board;
pub use castling::CastlingRights;
pub use config::{CastlingPolicy, ParsePolicyError, RulesConfig};
pub use game::{Game, GameError, GameStatus, GameView, MoveResult, Phase, UndoResult};
pub use history::{History, Snapshot};
pub use position::{Played, Position};
pub use rules::{LegalMove, MoveKind, Rules};
