//! Typeahead
//!
//! Search-as-you-type picker over a fixed candidate list.
//!
//! Follows a Pure Core / Impure Shell split: `model` and `state` hold the
//! debounced search engine and take time as an argument, while `view`
//! owns the terminal and the clock.

pub mod config;
pub mod logging;
pub mod model;
pub mod source;
pub mod state;
pub mod view;
