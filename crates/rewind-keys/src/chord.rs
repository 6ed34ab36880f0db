//! Chord resolution and button text for history actions.

use rewind_config::HintStyle;

/// A navigation step triggered from the keyboard or a toolbar button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryAction {
    Undo,
    Redo,
}

impl HistoryAction {
    /// Button caption.
    pub fn label(self) -> &'static str {
        match self {
            HistoryAction::Undo => "Undo",
            HistoryAction::Redo => "Redo",
        }
    }

    /// Primary chord for this action, written for the given platform style.
    pub fn shortcut_hint(self, style: HintStyle) -> &'static str {
        match (self, style) {
            (HistoryAction::Undo, HintStyle::Mac) => "⌘Z",
            (HistoryAction::Redo, HintStyle::Mac) => "⌘⇧Z",
            (HistoryAction::Undo, HintStyle::Standard) => "Ctrl+Z",
            (HistoryAction::Redo, HintStyle::Standard) => "Ctrl+Shift+Z",
        }
    }

    /// Button tooltip, e.g. `"Undo (Ctrl+Z)"` or just `"Undo"`.
    pub fn tooltip(self, style: HintStyle, show_shortcut: bool) -> String {
        if show_shortcut {
            format!("{} ({})", self.label(), self.shortcut_hint(style))
        } else {
            self.label().to_string()
        }
    }
}

/// Maps a key press to a history action.
///
/// The modifier may be Ctrl, Command, or the Mac Cmd key. Z undoes,
/// Shift+Z and Y redo. Alt is ignored.
pub fn resolve_chord(key: egui::Key, modifiers: egui::Modifiers) -> Option<HistoryAction> {
    let ctrl = modifiers.ctrl || modifiers.command || modifiers.mac_cmd;
    if !ctrl {
        return None;
    }
    match key {
        egui::Key::Z if modifiers.shift => Some(HistoryAction::Redo),
        egui::Key::Z => Some(HistoryAction::Undo),
        egui::Key::Y => Some(HistoryAction::Redo),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{Key, Modifiers};

    #[test]
    fn test_ctrl_z_undoes() {
        assert_eq!(resolve_chord(Key::Z, Modifiers::CTRL), Some(HistoryAction::Undo));
        assert_eq!(
            resolve_chord(Key::Z, Modifiers::COMMAND),
            Some(HistoryAction::Undo)
        );
        assert_eq!(
            resolve_chord(Key::Z, Modifiers::MAC_CMD),
            Some(HistoryAction::Undo)
        );
    }

    #[test]
    fn test_shift_z_and_y_redo() {
        assert_eq!(
            resolve_chord(Key::Z, Modifiers::CTRL | Modifiers::SHIFT),
            Some(HistoryAction::Redo)
        );
        assert_eq!(resolve_chord(Key::Y, Modifiers::CTRL), Some(HistoryAction::Redo));
        assert_eq!(
            resolve_chord(Key::Y, Modifiers::MAC_CMD | Modifiers::SHIFT),
            Some(HistoryAction::Redo)
        );
    }

    #[test]
    fn test_alt_is_ignored() {
        assert_eq!(
            resolve_chord(Key::Z, Modifiers::CTRL | Modifiers::ALT),
            Some(HistoryAction::Undo)
        );
    }

    #[test]
    fn test_unmodified_and_other_keys_pass_through() {
        assert_eq!(resolve_chord(Key::Z, Modifiers::NONE), None);
        assert_eq!(resolve_chord(Key::Y, Modifiers::SHIFT), None);
        assert_eq!(resolve_chord(Key::X, Modifiers::CTRL), None);
        assert_eq!(resolve_chord(Key::Z, Modifiers::ALT), None);
    }

    #[test]
    fn test_labels_and_hints() {
        assert_eq!(HistoryAction::Undo.label(), "Undo");
        assert_eq!(HistoryAction::Redo.shortcut_hint(HintStyle::Mac), "⌘⇧Z");
        assert_eq!(
            HistoryAction::Undo.tooltip(HintStyle::Standard, true),
            "Undo (Ctrl+Z)"
        );
        assert_eq!(HistoryAction::Redo.tooltip(HintStyle::Mac, false), "Redo");
    }
}
