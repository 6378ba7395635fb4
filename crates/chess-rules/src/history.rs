//! Snapshot stack backing undo.

use crate::game::GameStatus;
use crate::Position;
use chess_core::Move;

/// The state immediately before a committed move, plus the move itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub position: Position,
    pub status: GameStatus,
    pub played: Move,
}

/// Most-recent-last stack of [`Snapshot`]s.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    entries: Vec<Snapshot>,
}

impl History {
    pub const fn new() -> Self {
        History {
            entries: Vec::new(),
        }
    }

    pub fn push(&mut self, snapshot: Snapshot) {
        self.entries.push(snapshot);
    }

    pub fn pop(&mut self) -> Option<Snapshot> {
        self.entries.pop()
    }

    /// Returns the most recent snapshot without removing it.
    pub fn peek(&self) -> Option<&Snapshot> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterates over the committed moves, oldest first.
    pub fn moves(&self) -> impl Iterator<Item = Move> + '_ {
        self.entries.iter().map(|entry| entry.played)
    }
}
