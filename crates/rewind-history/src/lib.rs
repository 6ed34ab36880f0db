/// Bounded undo/redo history over full snapshots.
///
/// Provides a `HistoryManager` that keeps a linear `past`/`present`/`future`
/// history for one editable value. History lives in memory only and is
/// dropped together with the editing session that owns it.
pub mod config;
pub mod manager;
pub mod state;
pub mod timeline;

pub use config::HistoryConfig;
pub use manager::HistoryManager;
pub use state::HistoryState;
pub use timeline::{PanelEntry, Position, Timeline, TimelinePoint, DEFAULT_TIMELINE_VISIBLE};
