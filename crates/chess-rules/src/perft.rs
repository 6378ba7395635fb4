//! Perft (performance test) for move generator validation.
//!
//! Perft counts the leaf nodes of the legal move tree to a given depth. From
//! the starting position the first plies involve no en passant, promotion or
//! castling, so the well-known counts apply unchanged.

use crate::rules::Rules;
use crate::Position;

/// Counts the number of leaf nodes at the given depth.
pub fn perft(rules: &Rules, position: &Position, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = rules.legal_moves(position);
    if depth == 1 {
        return moves.len() as u64;
    }

    moves
        .into_iter()
        .filter_map(|m| position.play(m))
        .map(|played| perft(rules, &played.position, depth - 1))
        .sum()
}

/// Perft with divide: the node count below each root move, sorted by move.
pub fn perft_divide(rules: &Rules, position: &Position, depth: u32) -> Vec<(String, u64)> {
    let mut results: Vec<(String, u64)> = rules
        .legal_moves(position)
        .into_iter()
        .filter_map(|m| {
            let played = position.play(m)?;
            let nodes = if depth > 1 {
                perft(rules, &played.position, depth - 1)
            } else {
                1
            };
            Some((m.to_coordinate(), nodes))
        })
        .collect();

    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}
