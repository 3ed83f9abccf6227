use super::{Board, Cell};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Thread-safe handle to a [`Board`].
///
/// Every operation holds the lock for its whole duration, so an update reads
/// the old generation and installs the new one without interleaving edits.
/// Clones share the same board.
#[derive(Clone, Debug, Default)]
pub struct SharedBoard {
    inner: Arc<Mutex<Board>>,
}

impl SharedBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_board(board: Board) -> Self {
        Self {
            inner: Arc::new(Mutex::new(board)),
        }
    }

    // `Board` methods never leave the set half-written, so a poisoned lock
    // still guards a consistent board.
    fn lock(&self) -> MutexGuard<'_, Board> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn update(&self) {
        self.lock().update();
    }

    pub fn toggle_cell(&self, cell: Cell) -> bool {
        self.lock().toggle_cell(cell)
    }

    pub fn is_alive(&self, cell: Cell) -> bool {
        self.lock().is_alive(cell)
    }

    pub fn clear_board(&self) {
        self.lock().clear_board();
    }

    pub fn population(&self) -> usize {
        self.lock().population()
    }

    /// Copies the live cells out of the lock.
    pub fn snapshot(&self) -> Vec<Cell> {
        self.lock().live_cells().collect()
    }

    pub fn with<R>(&self, f: impl FnOnce(&Board) -> R) -> R {
        f(&self.lock())
    }

    pub fn with_mut<R>(&self, f: impl FnOnce(&mut Board) -> R) -> R {
        f(&mut self.lock())
    }
}
