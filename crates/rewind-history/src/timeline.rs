//! Read-only views for history panels and timeline scrubbers.

use crate::manager::HistoryManager;

/// Default number of points shown by a timeline window.
pub const DEFAULT_TIMELINE_VISIBLE: usize = 10;

/// Where a timeline point sits relative to the present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    Past,
    Current,
    Future,
}

/// One row of a history panel (past entries and the present).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelEntry<'a, T> {
    /// Timeline index, usable with `HistoryManager::restore`.
    pub index: usize,
    pub state: &'a T,
    pub is_current: bool,
    /// `"Current"` for the present, `"Step N"` (1-based) otherwise.
    pub label: String,
}

/// One point of a timeline window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelinePoint<'a, T> {
    /// Absolute timeline index.
    pub index: usize,
    pub state: &'a T,
    pub position: Position,
}

/// A window over `past ++ [present] ++ future`, roughly centered on the present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timeline<'a, T> {
    /// Absolute index of the first visible point.
    pub start: usize,
    pub points: Vec<TimelinePoint<'a, T>>,
}

impl<T> Timeline<'_, T> {
    /// The visible point for the present snapshot, if it is in the window.
    pub fn current(&self) -> Option<&TimelinePoint<'_, T>> {
        self.points
            .iter()
            .find(|p| p.position == Position::Current)
    }
}

impl<T> HistoryManager<T> {
    /// Lists past snapshots and the present, oldest first.
    pub fn panel_entries(&self) -> Vec<PanelEntry<'_, T>> {
        let history = self.history();
        let current = history.current_index();
        history
            .iter()
            .take(current + 1)
            .enumerate()
            .map(|(index, state)| PanelEntry {
                index,
                state,
                is_current: index == current,
                label: if index == current {
                    "Current".to_string()
                } else {
                    format!("Step {}", index + 1)
                },
            })
            .collect()
    }

    /// Returns at most `max_visible` timeline points around the present.
    ///
    /// The window starts `max_visible / 2` points before the present (or at
    /// the oldest snapshot) and may be shorter near the end of the timeline.
    pub fn timeline(&self, max_visible: usize) -> Timeline<'_, T> {
        let history = self.history();
        let current = history.current_index();
        let start = current.saturating_sub(max_visible / 2);
        let points = history
            .iter()
            .enumerate()
            .skip(start)
            .take(max_visible)
            .map(|(index, state)| TimelinePoint {
                index,
                state,
                position: match index.cmp(&current) {
                    std::cmp::Ordering::Less => Position::Past,
                    std::cmp::Ordering::Equal => Position::Current,
                    std::cmp::Ordering::Greater => Position::Future,
                },
            })
            .collect();
        Timeline { start, points }
    }
}
