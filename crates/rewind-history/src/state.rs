//! The `past` / `present` / `future` triple.

use std::collections::VecDeque;

use serde::Serialize;

/// Linear snapshot history for one value.
///
/// `past` is ordered oldest first (the tail is the next undo target) and
/// `future` nearest first (the head is the next redo target). Together with
/// `present` they form the timeline `past ++ [present] ++ future`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryState<T> {
    past: VecDeque<T>,
    present: T,
    future: VecDeque<T>,
}

impl<T> HistoryState<T> {
    /// Creates a history with no past or future.
    pub fn new(present: T) -> Self {
        Self {
            past: VecDeque::new(),
            present,
            future: VecDeque::new(),
        }
    }

    /// Previously committed snapshots, oldest first.
    pub fn past(&self) -> &VecDeque<T> {
        &self.past
    }

    /// The active snapshot.
    pub fn present(&self) -> &T {
        &self.present
    }

    /// Undone snapshots, nearest first.
    pub fn future(&self) -> &VecDeque<T> {
        &self.future
    }

    /// Timeline index of the present snapshot.
    pub fn current_index(&self) -> usize {
        self.past.len()
    }

    /// Number of states on the timeline (always >= 1).
    pub fn len(&self) -> usize {
        self.past.len() + 1 + self.future.len()
    }

    /// Always `false`: there is at least the present snapshot.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the snapshot at a timeline index.
    pub fn get(&self, index: usize) -> Option<&T> {
        let current = self.current_index();
        match index.cmp(&current) {
            std::cmp::Ordering::Less => self.past.get(index),
            std::cmp::Ordering::Equal => Some(&self.present),
            std::cmp::Ordering::Greater => self.future.get(index - current - 1),
        }
    }

    /// Iterates the whole timeline, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.past
            .iter()
            .chain(std::iter::once(&self.present))
            .chain(self.future.iter())
    }

    pub(crate) fn past_mut(&mut self) -> &mut VecDeque<T> {
        &mut self.past
    }

    pub(crate) fn future_mut(&mut self) -> &mut VecDeque<T> {
        &mut self.future
    }

    /// Swaps in a new present, returning the old one.
    pub(crate) fn replace_present(&mut self, present: T) -> T {
        std::mem::replace(&mut self.present, present)
    }
}
