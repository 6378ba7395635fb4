//! Text rendering of the game state.

use crate::config::DisplayConfig;
use chess_core::{Piece, Square};
use chess_rules::{GameStatus, GameView, LegalMove, MoveKind, MoveResult, Phase};
use std::fmt::Write;

/// Draws the board, marking `highlights` with `*` (quiet) or `x` (capture).
pub fn board(view: &GameView, highlights: &[LegalMove], display: DisplayConfig) -> String {
    let mut out = String::new();
    let selected = match view.phase {
        Phase::PieceSelected(sq) => Some(sq),
        _ => None,
    };

    for row in 0..8u8 {
        if display.coordinates {
            let _ = write!(out, "{} ", 8 - row);
        }
        for col in 0..8u8 {
            let sq = Square::at(row, col);
            let mark = highlights.iter().find(|m| m.to == sq).map(|m| m.kind);
            let c = match (view.board.piece_at(sq), mark) {
                (Some(_), Some(MoveKind::Capture)) => 'x',
                (None, Some(_)) => '*',
                (piece, _) => piece.map_or('.', Piece::to_fen_char),
            };
            let (open, close) = if selected == Some(sq) {
                ('[', ']')
            } else if view.checked_king == Some(sq) {
                ('!', '!')
            } else {
                (' ', ' ')
            };
            let _ = write!(out, "{}{}{}", open, c, close);
        }
        out.push('\n');
    }
    if display.coordinates {
        out.push_str("   a  b  c  d  e  f  g  h\n");
    }
    out.push_str(&status_line(view));
    out
}

/// One line describing whose turn it is or who won.
pub fn status_line(view: &GameView) -> String {
    match view.status {
        GameStatus::Checkmate(winner) => format!("Checkmate. {} wins.\n", winner),
        GameStatus::InProgress if view.checked_king.is_some() => {
            format!("{} to move, in check.\n", view.side_to_move)
        }
        GameStatus::InProgress => format!("{} to move.\n", view.side_to_move),
    }
}

/// Lists destinations as `e4 xd5 O-O`.
pub fn destinations(moves: &[LegalMove]) -> String {
    if moves.is_empty() {
        return "no legal moves".to_string();
    }
    moves
        .iter()
        .map(|m| match m.kind {
            MoveKind::Quiet => m.to.to_string(),
            MoveKind::Capture => format!("x{}", m.to),
            MoveKind::Castle(side) => format!("{} ({})", m.to, side),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Describes the outcome of a move request.
pub fn move_result(result: &MoveResult) -> String {
    match result {
        MoveResult::Applied => "ok".to_string(),
        MoveResult::AppliedWithCastle { rook_from, rook_to } => {
            format!("castled, rook {} -> {}", rook_from, rook_to)
        }
        MoveResult::Rejected(err) => format!("rejected: {}", err),
        MoveResult::Checkmate(winner) => format!("checkmate, {} wins", winner),
    }
}
