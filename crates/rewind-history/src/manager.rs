/// Snapshot undo/redo manager.
///
/// Every commit pushes the previous present onto a bounded `past` stack and
/// discards the redo branch. Undo and redo move the present across the
/// `past`/`future` boundary. Calls with nothing to undo or redo are no-ops.
use crate::config::HistoryConfig;
use crate::state::HistoryState;

/// Manages undo/redo history for a single editable value.
///
/// Each editing session owns its own `HistoryManager`. Snapshots are taken
/// by value and only handed back as shared references, so a stored entry
/// can never be changed behind the manager's back.
pub struct HistoryManager<T> {
    /// The `past` / `present` / `future` triple.
    history: HistoryState<T>,
    /// Configuration parameters.
    config: HistoryConfig,
}

impl<T> std::fmt::Debug for HistoryManager<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HistoryManager")
            .field("past_len", &self.history.past().len())
            .field("future_len", &self.history.future().len())
            .field("max_history", &self.config.max_history)
            .finish()
    }
}

impl<T> HistoryManager<T> {
    /// Creates a manager whose present is `initial`.
    pub fn new(initial: T, mut config: HistoryConfig) -> Self {
        config.sanitize();
        Self {
            history: HistoryState::new(initial),
            config,
        }
    }

    /// Creates a manager retaining at most `max_history` states.
    pub fn with_max_history(initial: T, max_history: usize) -> Self {
        Self::new(initial, HistoryConfig::with_max_history(max_history))
    }

    /// The active snapshot.
    pub fn state(&self) -> &T {
        self.history.present()
    }

    /// Read-only view of the whole history.
    pub fn history(&self) -> &HistoryState<T> {
        &self.history
    }

    /// Max total states retained, counting the present.
    pub fn max_history(&self) -> usize {
        self.config.max_history
    }

    /// Whether undo is available.
    pub fn can_undo(&self) -> bool {
        !self.history.past().is_empty()
    }

    /// Whether redo is available.
    pub fn can_redo(&self) -> bool {
        !self.history.future().is_empty()
    }

    /// Applies a new snapshot.
    ///
    /// With `skip_history` the present is replaced in place and neither
    /// `past` nor `future` changes. Otherwise the old present becomes the
    /// newest past entry, the oldest entries are pruned to honor
    /// `max_history`, and the redo branch is discarded.
    pub fn set(&mut self, new_state: T, skip_history: bool) {
        if skip_history {
            self.history.replace_present(new_state);
            tracing::trace!("History silent update");
            return;
        }

        let previous = self.history.replace_present(new_state);
        let capacity = self.config.past_capacity();
        let past = self.history.past_mut();
        past.push_back(previous);
        if past.len() > capacity {
            let excess = past.len() - capacity;
            past.drain(..excess);
            tracing::debug!("History bound reached, dropped {excess} oldest snapshot(s)");
        }

        let discarded = self.history.future().len();
        self.history.future_mut().clear();
        if discarded > 0 {
            tracing::debug!("Commit discarded {discarded} redo snapshot(s)");
        }
        tracing::trace!(past_len = self.history.past().len(), "History commit");
    }

    /// Commits a snapshot as a new undo point.
    pub fn commit(&mut self, new_state: T) {
        self.set(new_state, false);
    }

    /// Replaces the present without creating an undo point.
    pub fn preview(&mut self, new_state: T) {
        self.set(new_state, true);
    }

    /// Steps back one snapshot.
    ///
    /// Returns `false` without touching anything if there's nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.history.past_mut().pop_back() else {
            return false;
        };
        let current = self.history.replace_present(previous);
        self.history.future_mut().push_front(current);
        tracing::trace!("History undo");
        true
    }

    /// Steps forward one snapshot.
    ///
    /// Returns `false` without touching anything if there's nothing to redo.
    pub fn redo(&mut self) -> bool {
        let Some(next) = self.history.future_mut().pop_front() else {
            return false;
        };
        let current = self.history.replace_present(next);
        self.history.past_mut().push_back(current);
        tracing::trace!("History redo");
        true
    }

    /// Discards all history and starts over from `new_initial_state`.
    pub fn reset(&mut self, new_initial_state: T) {
        self.history = HistoryState::new(new_initial_state);
        tracing::debug!("History reset");
    }
}

impl<T: Clone> HistoryManager<T> {
    /// Drops `past` and `future`, keeping the present snapshot.
    pub fn clear_history(&mut self) {
        let present = self.history.present().clone();
        self.reset(present);
    }

    /// Jumps to a timeline index by committing a copy of that snapshot.
    ///
    /// Indices address `past ++ [present] ++ future`. The jump is itself
    /// undoable and discards the redo branch like any commit. Returns
    /// `false` for the current index or an index off the timeline.
    pub fn restore(&mut self, index: usize) -> bool {
        if index == self.history.current_index() {
            return false;
        }
        let Some(snapshot) = self.history.get(index).cloned() else {
            tracing::debug!("Ignoring restore of unknown history index {index}");
            return false;
        };
        self.commit(snapshot);
        true
    }
}
