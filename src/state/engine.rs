//! Search widget engine: the debounced search-and-pick state machine.
//!
//! Four pieces of state (query, debounced query, selection, focus) driven by
//! four events plus the debounce timer firing. Everything the renderer needs
//! is derived on demand from that state; nothing derived is stored.
//!
//! Time is passed in rather than read from a clock, so every transition is a
//! pure function of (state, event, instant).
//!
//! # Invariants
//!
//! - `debounced_query` only ever holds a value `query` held earlier.
//! - `selection` and `query` agree (`query == selection.name`) only right
//!   after a pick. Any edit to the query clears the selection.
//! - A blank query never coexists with a selection.

use crate::config::DebounceDelay;
use crate::model::{EngineError, Record, Slug};
use crate::state::debounce::DebounceTimer;
use crate::state::filter::filter_candidates;
use std::fmt;
use std::time::Instant;
use tracing::{debug, warn};

/// Label shown when nothing is selected.
pub const NO_SELECTION_LABEL: &str = "No selected person";

/// Callback invoked synchronously on every selection transition.
pub type SelectionListener = Box<dyn FnMut(Option<&Record>)>;

/// Read-only view of the engine for a presentation layer.
///
/// Sufficient to render an input box, a dropdown list, and a "no matches"
/// notice without re-deriving any filtering logic.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot<'a> {
    /// Current literal input text.
    pub query: &'a str,
    /// Whether the suggestion dropdown should be open.
    pub panel_visible: bool,
    /// Records populating the dropdown, in candidate order.
    pub visible_set: Vec<&'a Record>,
    /// Whether to show an explicit "no matches" notice.
    pub no_matches_indicator_visible: bool,
    /// Header text describing the current selection.
    pub selection_label: String,
}

/// Debounced search-as-you-type engine over a fixed candidate list.
pub struct SearchEngine {
    candidates: Vec<Record>,
    query: String,
    debounced_query: String,
    /// Index into `candidates`.
    selection: Option<usize>,
    focused: bool,
    timer: DebounceTimer<String>,
    listener: Option<SelectionListener>,
}

impl SearchEngine {
    /// Create an engine over `candidates`.
    ///
    /// Slugs are expected to be unique (see `source::load_candidates`).
    /// Starts unfocused with an empty query and no selection.
    pub fn new(candidates: Vec<Record>, delay: DebounceDelay) -> Self {
        debug!(
            candidates = candidates.len(),
            delay_ms = delay.as_millis(),
            "Search engine created"
        );
        Self {
            candidates,
            query: String::new(),
            debounced_query: String::new(),
            selection: None,
            focused: false,
            timer: DebounceTimer::new(delay.as_duration()),
            listener: None,
        }
    }

    /// Register the selection-changed callback, replacing any previous one.
    pub fn with_listener(mut self, listener: impl FnMut(Option<&Record>) + 'static) -> Self {
        self.listener = Some(Box::new(listener));
        self
    }

    // ===== Events =====

    /// The input text changed to `text`.
    ///
    /// Clears any selection and re-arms the debounce timer. The debounced
    /// query is left alone until the timer fires.
    pub fn on_input_changed(&mut self, text: impl Into<String>, now: Instant) {
        let was_blank = is_blank(&self.query);
        let had_selection = self.selection.take().is_some();

        self.query = text.into();
        self.timer.arm(self.query.clone(), now);

        let became_blank = !was_blank && is_blank(&self.query);
        if had_selection || became_blank {
            debug!(query = %self.query, "Selection invalidated by input");
            self.notify();
        }
    }

    /// The input gained focus.
    ///
    /// With a blank query the debounced query is reset immediately so the
    /// full list can show without waiting for the timer.
    pub fn on_focus_gained(&mut self) {
        self.focused = true;

        if is_blank(&self.query) {
            self.timer.cancel();
            self.debounced_query.clear();
        }
    }

    /// The input lost focus. Query and selection are kept.
    pub fn on_focus_lost(&mut self) {
        self.focused = false;
    }

    /// The user picked the candidate identified by `slug`.
    ///
    /// The query snaps to the record's display name and the listener is
    /// notified. Unknown slugs are rejected without touching any state.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnknownRecord`] if no candidate has `slug`.
    pub fn on_item_picked(&mut self, slug: &Slug, now: Instant) -> Result<(), EngineError> {
        let Some(index) = self.candidates.iter().position(|r| r.slug() == slug) else {
            warn!(%slug, "Pick rejected: unknown slug");
            return Err(EngineError::UnknownRecord { slug: slug.clone() });
        };

        self.selection = Some(index);
        self.query = self.candidates[index].name().as_str().to_string();
        self.timer.arm(self.query.clone(), now);

        debug!(%slug, "Candidate picked");
        self.notify();
        Ok(())
    }

    /// Fire the debounce timer if its deadline has passed.
    ///
    /// Returns `true` when the debounced query was updated.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.timer.fire(now) {
            Some(value) => {
                debug!(debounced = %value, "Debounce settled");
                self.debounced_query = value;
                true
            }
            None => false,
        }
    }

    /// When the pending debounce update is due, if any.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timer.deadline()
    }

    /// Tear the engine down, discarding any pending debounce update.
    pub fn teardown(mut self) {
        if self.timer.is_pending() {
            debug!("Cancelling pending debounce on teardown");
        }
        self.timer.cancel();
    }

    // ===== State accessors =====

    /// Current literal input text.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Query value the filter currently runs against.
    pub fn debounced_query(&self) -> &str {
        &self.debounced_query
    }

    /// Currently selected record.
    pub fn selection(&self) -> Option<&Record> {
        self.selection.map(|i| &self.candidates[i])
    }

    /// Whether the input has focus.
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// The full, immutable candidate list.
    pub fn candidates(&self) -> &[Record] {
        &self.candidates
    }

    // ===== Derived state =====

    /// Records to show in the dropdown.
    ///
    /// A blank debounced query shows everything while focused and nothing
    /// otherwise. A non-blank one filters by case-insensitive substring.
    pub fn visible_set(&self) -> Vec<&Record> {
        if is_blank(&self.debounced_query) {
            if self.focused {
                self.candidates.iter().collect()
            } else {
                Vec::new()
            }
        } else {
            filter_candidates(&self.candidates, &self.debounced_query)
        }
    }

    /// Whether the dropdown should be open.
    ///
    /// Requires focus, no settled selection, and at least one row to show.
    /// An empty result is reported through the no-matches indicator instead.
    pub fn panel_visible(&self) -> bool {
        self.panel_visible_for(&self.visible_set())
    }

    /// Whether a non-blank query produced no matches.
    pub fn no_matches_indicator_visible(&self) -> bool {
        self.no_matches_for(&self.visible_set())
    }

    /// Header text: `Name (born - died)` or [`NO_SELECTION_LABEL`].
    pub fn selection_label(&self) -> String {
        self.selection()
            .map(Record::label)
            .unwrap_or_else(|| NO_SELECTION_LABEL.to_string())
    }

    /// Everything a renderer needs, computed once.
    pub fn snapshot(&self) -> Snapshot<'_> {
        let visible_set = self.visible_set();
        let panel_visible = self.panel_visible_for(&visible_set);
        let no_matches_indicator_visible = self.no_matches_for(&visible_set);

        Snapshot {
            query: &self.query,
            panel_visible,
            visible_set,
            no_matches_indicator_visible,
            selection_label: self.selection_label(),
        }
    }

    fn panel_visible_for(&self, visible_set: &[&Record]) -> bool {
        self.focused && self.selection.is_none() && !visible_set.is_empty()
    }

    fn no_matches_for(&self, visible_set: &[&Record]) -> bool {
        !is_blank(&self.debounced_query) && visible_set.is_empty()
    }

    fn notify(&mut self) {
        if let Some(listener) = self.listener.as_mut() {
            listener(self.selection.map(|i| &self.candidates[i]));
        }
    }
}

impl fmt::Debug for SearchEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchEngine")
            .field("candidates", &self.candidates.len())
            .field("query", &self.query)
            .field("debounced_query", &self.debounced_query)
            .field("selection", &self.selection().map(Record::slug))
            .field("focused", &self.focused)
            .field("timer", &self.timer)
            .finish_non_exhaustive()
    }
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

// ===== Tests =====

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
