//! Picker state: the engine plus the dropdown highlight cursor.
//!
//! Routes domain key actions to engine events. Pure apart from the
//! instant supplied by the caller; testable without a terminal.

use crate::model::KeyAction;
use crate::state::engine::SearchEngine;
use std::time::Instant;
use tracing::warn;

/// Search engine with a highlighted dropdown row.
#[derive(Debug)]
pub struct PickerState {
    engine: SearchEngine,
    highlighted: usize,
}

impl PickerState {
    /// Wrap an engine. The highlight starts on the first row.
    pub fn new(engine: SearchEngine) -> Self {
        Self {
            engine,
            highlighted: 0,
        }
    }

    /// The wrapped engine.
    pub fn engine(&self) -> &SearchEngine {
        &self.engine
    }

    /// Unwrap the engine, e.g. for teardown.
    pub fn into_engine(self) -> SearchEngine {
        self.engine
    }

    /// Highlighted row in the visible set, clamped to its length.
    ///
    /// `None` when the dropdown has no rows.
    pub fn highlighted(&self) -> Option<usize> {
        let len = self.engine.visible_set().len();
        (len > 0).then(|| self.highlighted.min(len - 1))
    }

    /// Apply one key action.
    ///
    /// Editing a blurred input gives it focus first, so text never lands
    /// in an unfocused box. Returns `true` if the application should quit.
    pub fn apply(&mut self, action: KeyAction, now: Instant) -> bool {
        let is_edit = matches!(
            action,
            KeyAction::InsertChar(_) | KeyAction::DeleteBackward | KeyAction::ClearInput
        );
        if is_edit && !self.engine.is_focused() {
            self.focus();
        }

        match action {
            KeyAction::InsertChar(c) => {
                let mut text = self.engine.query().to_string();
                text.push(c);
                self.edit(text, now);
            }
            KeyAction::DeleteBackward => {
                let mut text = self.engine.query().to_string();
                if text.pop().is_some() {
                    self.edit(text, now);
                }
            }
            KeyAction::ClearInput => self.edit(String::new(), now),
            KeyAction::HighlightNext => self.move_highlight(1),
            KeyAction::HighlightPrev => self.move_highlight(-1),
            KeyAction::PickHighlighted => self.pick_highlighted(now),
            KeyAction::ToggleFocus => {
                if self.engine.is_focused() {
                    self.engine.on_focus_lost();
                } else {
                    self.focus();
                }
            }
            KeyAction::Blur => {
                if !self.engine.is_focused() {
                    return true;
                }
                self.engine.on_focus_lost();
            }
            KeyAction::Quit => return true,
        }
        false
    }

    /// Give the input focus.
    pub fn focus(&mut self) {
        self.engine.on_focus_gained();
        self.highlighted = 0;
    }

    /// Advance the debounce timer. Returns `true` if the visible set may have changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let fired = self.engine.tick(now);
        if fired {
            self.highlighted = 0;
        }
        fired
    }

    fn edit(&mut self, text: String, now: Instant) {
        self.engine.on_input_changed(text, now);
    }

    fn move_highlight(&mut self, delta: isize) {
        if !self.engine.panel_visible() {
            return;
        }
        let len = self.engine.visible_set().len();
        let current = self.highlighted.min(len - 1);
        self.highlighted = if delta >= 0 {
            (current + 1) % len
        } else {
            (current + len - 1) % len
        };
    }

    fn pick_highlighted(&mut self, now: Instant) {
        if !self.engine.panel_visible() {
            return;
        }
        let Some(slug) = self
            .highlighted()
            .and_then(|row| self.engine.visible_set().get(row).map(|r| r.slug().clone()))
        else {
            return;
        };

        if let Err(err) = self.engine.on_item_picked(&slug, now) {
            // Rows come from the candidate list, so this only fires on a logic error
            warn!(%err, "Highlighted row could not be picked");
        }
    }
}
