//! Bounded undo history of full match snapshots.

use crate::models::game::Game;
use std::collections::VecDeque;

/// How many turns back the undo history reaches.
pub const UNDO_CAPACITY: usize = 10;

/// LIFO of pre-turn match snapshots. Pushing past capacity silently drops the
/// oldest entry; popping an empty stack yields None. Cleared on leg and match
/// boundaries, so undo never crosses them.
#[derive(Clone, Debug, Default)]
pub struct UndoStack {
    snapshots: VecDeque<Game>,
}

impl UndoStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a snapshot, dropping the oldest one if at capacity.
    pub fn push(&mut self, snapshot: Game) {
        if self.snapshots.len() == UNDO_CAPACITY {
            self.snapshots.pop_front();
        }
        self.snapshots.push_back(snapshot);
    }

    /// Most recent snapshot, or None when the history is exhausted.
    pub fn pop(&mut self) -> Option<Game> {
        self.snapshots.pop_back()
    }

    pub fn clear(&mut self) {
        self.snapshots.clear();
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}
