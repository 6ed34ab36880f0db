//! Undo/redo keyboard shortcuts for history managers.
//!
//! Maps the conventional chords (Ctrl/Cmd+Z, Ctrl/Cmd+Shift+Z, Ctrl/Cmd+Y)
//! to history actions and routes them to whichever manager currently owns
//! the keyboard binding.

pub mod chord;
pub mod router;

pub use chord::{resolve_chord, HistoryAction};
pub use router::{KeyRouter, Navigate, ShortcutGuard};
