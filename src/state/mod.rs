//! Application state (pure core).
//!
//! The search engine state machine, its debounce timer and filter, and the
//! picker state that routes key actions into it. Nothing here touches the
//! terminal or the clock.

pub mod debounce;
pub mod engine;
pub mod filter;
pub mod picker;

pub use debounce::DebounceTimer;
pub use engine::{SearchEngine, SelectionListener, Snapshot, NO_SELECTION_LABEL};
pub use filter::filter_candidates;
pub use picker::PickerState;
