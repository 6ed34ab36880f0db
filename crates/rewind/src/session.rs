//! A scripted editing session over a text history.

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::{Context, Result};
use rewind_config::AppConfig;
use rewind_history::{HistoryConfig, HistoryManager, Position};
use rewind_keys::{HistoryAction, KeyRouter, ShortcutGuard};

use crate::script::Command;

pub struct Session {
    /// Held for the whole session when shortcuts are enabled.
    _shortcuts: Option<ShortcutGuard>,
    router: KeyRouter,
    history: Rc<RefCell<HistoryManager<String>>>,
    config: AppConfig,
}

impl Session {
    pub fn new(initial: String, config: AppConfig) -> Self {
        let history = Rc::new(RefCell::new(HistoryManager::new(
            initial,
            HistoryConfig::from(&config),
        )));
        let router = KeyRouter::new();
        let shortcuts = config
            .shortcuts_enabled
            .then(|| router.bind(Rc::clone(&history)));
        Self {
            _shortcuts: shortcuts,
            router,
            history,
            config,
        }
    }

    /// Runs one command and returns any extra output lines.
    pub fn apply(&mut self, command: &Command) -> Vec<String> {
        tracing::debug!(?command, "Applying command");
        match command {
            Command::Set(text) => self.history.borrow_mut().set(text.clone(), false),
            Command::Preview(text) => self.history.borrow_mut().set(text.clone(), true),
            Command::Undo => {
                self.history.borrow_mut().undo();
            }
            Command::Redo => {
                self.history.borrow_mut().redo();
            }
            Command::Reset(text) => self.history.borrow_mut().reset(text.clone()),
            Command::Restore(index) => {
                if !self.history.borrow_mut().restore(*index) {
                    return vec![format!("restore {index}: nothing to restore")];
                }
            }
            Command::Clear => self.history.borrow_mut().clear_history(),
            Command::Key(chord) => {
                if !self.router.handle_key(chord.key, chord.modifiers) {
                    return vec!["key: not handled".to_string()];
                }
            }
            Command::Show => return self.describe(),
        }
        Vec::new()
    }

    /// One-line summary of the history triple.
    pub fn status_line(&self) -> String {
        let history = self.history.borrow();
        let h = history.history();
        format!(
            "past={:?} present={:?} future={:?}",
            h.past(),
            h.present(),
            h.future()
        )
    }

    /// The final history as pretty JSON.
    pub fn history_json(&self) -> Result<String> {
        let history = self.history.borrow();
        serde_json::to_string_pretty(history.history()).context("Failed to serialize history")
    }

    /// Renders the toolbar, history panel, and timeline as text.
    fn describe(&self) -> Vec<String> {
        let history = self.history.borrow();
        let mut lines = Vec::new();

        let buttons = [
            (HistoryAction::Undo, history.can_undo()),
            (HistoryAction::Redo, history.can_redo()),
        ];
        let toolbar: Vec<String> = buttons
            .iter()
            .map(|(action, enabled)| {
                let tooltip =
                    action.tooltip(self.config.hint_style, self.config.show_shortcut_hints);
                let state = if *enabled { "enabled" } else { "disabled" };
                format!("{tooltip} [{state}]")
            })
            .collect();
        lines.push(format!("toolbar: {}", toolbar.join(" | ")));

        for entry in history.panel_entries() {
            let marker = if entry.is_current { '*' } else { ' ' };
            lines.push(format!(
                "{marker} [{}] {}: {:?}",
                entry.index, entry.label, entry.state
            ));
        }

        let timeline = history.timeline(self.config.timeline_max_visible);
        let points: Vec<String> = timeline
            .points
            .iter()
            .map(|p| {
                let position = match p.position {
                    Position::Past => "past",
                    Position::Current => "current",
                    Position::Future => "future",
                };
                format!("{}:{position}", p.index)
            })
            .collect();
        lines.push(format!("timeline: {}", points.join(" ")));
        lines
    }
}
