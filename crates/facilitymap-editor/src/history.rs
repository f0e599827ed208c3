//! Bounded linear undo/redo over whole-value snapshots.
//!
//! The history keeps the current value plus up to `max_depth` earlier values.
//! Every [`EditHistory::set`] discards the redo branch, so history is a line,
//! never a tree. Pushing past the bound silently drops the oldest state.

use std::collections::VecDeque;

use facilitymap_core::constants::DEFAULT_HISTORY_DEPTH;

/// Snapshot-based undo/redo manager.
#[derive(Debug, Clone)]
pub struct EditHistory<T> {
    current: T,
    past: VecDeque<T>,
    future: VecDeque<T>,
    max_depth: usize,
}

impl<T: Clone> EditHistory<T> {
    /// Create a history with the default depth (50).
    pub fn new(initial: T) -> Self {
        Self::with_depth(initial, DEFAULT_HISTORY_DEPTH)
    }

    /// Create with a custom maximum undo depth (at least 1).
    pub fn with_depth(initial: T, max_depth: usize) -> Self {
        let max_depth = max_depth.max(1);
        Self {
            current: initial,
            past: VecDeque::with_capacity(max_depth),
            future: VecDeque::new(),
            max_depth,
        }
    }

    pub fn current(&self) -> &T {
        &self.current
    }

    /// Commits `next` as the current value.
    pub fn set(&mut self, next: T) {
        let previous = std::mem::replace(&mut self.current, next);
        self.push_past(previous);
        self.future.clear();
    }

    /// Steps back one state. Returns `false` when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.past.pop_back() else {
            return false;
        };
        let undone = std::mem::replace(&mut self.current, previous);
        self.future.push_front(undone);
        true
    }

    /// Steps forward one state. Returns `false` when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        let Some(next) = self.future.pop_front() else {
            return false;
        };
        let redone = std::mem::replace(&mut self.current, next);
        self.push_past(redone);
        true
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.past.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.future.len()
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Replaces the current value and forgets all history (document load).
    pub fn reset(&mut self, value: T) {
        self.current = value;
        self.past.clear();
        self.future.clear();
    }

    fn push_past(&mut self, value: T) {
        if self.past.len() == self.max_depth {
            self.past.pop_front();
        }
        self.past.push_back(value);
    }
}

impl<T: Clone + Default> Default for EditHistory<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
