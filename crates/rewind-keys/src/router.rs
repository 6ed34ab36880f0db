//! Routes undo/redo chords to the active history manager.
//!
//! A `KeyRouter` plays the role of the window-wide key listener. Editing
//! surfaces bind their manager with `KeyRouter::bind` and keep the returned
//! `ShortcutGuard` alive for as long as they are active; dropping the guard
//! removes the binding on every exit path. When several surfaces are bound
//! at once only the most recent one receives chords, so nested managers
//! never fire twice for one key press.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use rewind_history::HistoryManager;

use crate::chord::{resolve_chord, HistoryAction};

/// Something that can step backwards and forwards through history.
pub trait Navigate {
    /// Returns `true` if anything changed.
    fn undo(&mut self) -> bool;
    /// Returns `true` if anything changed.
    fn redo(&mut self) -> bool;
}

impl<T> Navigate for HistoryManager<T> {
    fn undo(&mut self) -> bool {
        HistoryManager::undo(self)
    }

    fn redo(&mut self) -> bool {
        HistoryManager::redo(self)
    }
}

impl HistoryAction {
    /// Runs this action against a target.
    pub fn apply(self, target: &mut dyn Navigate) -> bool {
        match self {
            HistoryAction::Undo => target.undo(),
            HistoryAction::Redo => target.redo(),
        }
    }
}

struct Binding {
    id: u64,
    target: Rc<RefCell<dyn Navigate>>,
}

type BindingTable = Rc<RefCell<Vec<Binding>>>;

/// Dispatches history chords to the most recently bound target.
pub struct KeyRouter {
    /// Live bindings, oldest first. The last entry is the active one.
    bindings: BindingTable,
    next_id: Cell<u64>,
}

impl Default for KeyRouter {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for KeyRouter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyRouter")
            .field("bindings", &self.binding_count())
            .field("next_id", &self.next_id.get())
            .finish()
    }
}

impl KeyRouter {
    /// Creates a router with no bindings.
    pub fn new() -> Self {
        Self {
            bindings: Rc::new(RefCell::new(Vec::new())),
            next_id: Cell::new(0),
        }
    }

    /// Binds `target` as the receiver of history chords.
    ///
    /// The binding lasts until the returned guard is dropped.
    pub fn bind<N: Navigate + 'static>(&self, target: Rc<RefCell<N>>) -> ShortcutGuard {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        let target: Rc<RefCell<dyn Navigate>> = target;
        self.bindings.borrow_mut().push(Binding { id, target });
        tracing::debug!(binding = id, "History shortcuts bound");
        ShortcutGuard {
            id,
            bindings: Rc::downgrade(&self.bindings),
        }
    }

    /// Whether any target is bound.
    pub fn is_bound(&self) -> bool {
        !self.bindings.borrow().is_empty()
    }

    /// Number of live bindings.
    pub fn binding_count(&self) -> usize {
        self.bindings.borrow().len()
    }

    /// Runs `action` on the active target.
    ///
    /// Returns `false` when nothing is bound. A target that is already
    /// borrowed elsewhere is skipped but the action still counts as handled.
    pub fn dispatch(&self, action: HistoryAction) -> bool {
        let active = self
            .bindings
            .borrow()
            .last()
            .map(|b| (b.id, Rc::clone(&b.target)));
        let Some((id, target)) = active else {
            return false;
        };

        match target.try_borrow_mut() {
            Ok(mut target) => {
                let changed = action.apply(&mut *target);
                tracing::trace!(binding = id, ?action, changed, "History shortcut");
            }
            Err(_) => {
                tracing::warn!(binding = id, ?action, "History target busy, shortcut dropped");
            }
        }
        true
    }

    /// Handles a single key press. Returns `true` if the chord was consumed.
    pub fn handle_key(&self, key: egui::Key, modifiers: egui::Modifiers) -> bool {
        match resolve_chord(key, modifiers) {
            Some(action) => self.dispatch(action),
            None => false,
        }
    }

    /// Handles pressed keys in an event queue, in order.
    ///
    /// Consumed chords are removed from the queue so no other widget acts on
    /// them. Returns the number of events consumed.
    pub fn handle_events(&self, events: &mut Vec<egui::Event>) -> usize {
        let before = events.len();
        events.retain(|event| match event {
            egui::Event::Key {
                key,
                pressed: true,
                modifiers,
                ..
            } => !self.handle_key(*key, *modifiers),
            _ => true,
        });
        before - events.len()
    }

    /// Handles this frame's input of an egui context.
    pub fn handle_input(&self, ctx: &egui::Context) -> usize {
        ctx.input_mut(|i| self.handle_events(&mut i.events))
    }
}

/// Keeps a router binding alive. Dropping it unbinds the target.
#[must_use = "dropping the guard unbinds the shortcuts immediately"]
pub struct ShortcutGuard {
    id: u64,
    bindings: Weak<RefCell<Vec<Binding>>>,
}

impl std::fmt::Debug for ShortcutGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShortcutGuard").field("id", &self.id).finish()
    }
}

impl Drop for ShortcutGuard {
    fn drop(&mut self) {
        // The router may already be gone.
        let Some(bindings) = self.bindings.upgrade() else {
            return;
        };
        bindings.borrow_mut().retain(|b| b.id != self.id);
        tracing::debug!(binding = self.id, "History shortcuts unbound");
    }
}
