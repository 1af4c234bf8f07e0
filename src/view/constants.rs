//! Layout dimension constants for TUI rendering.

/// Height of the selection header in lines.
pub const HEADER_HEIGHT: u16 = 1;

/// Height of the search input widget in lines (border + text).
pub const SEARCH_INPUT_HEIGHT: u16 = 3;

/// Height of the status bar in lines.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Placeholder shown in an empty input box.
pub const INPUT_PLACEHOLDER: &str = "Enter a part of the name";

/// Text of the no-matches notice.
pub const NO_MATCHES_TEXT: &str = "No matching suggestions";

/// Poll interval when no debounce deadline is pending.
pub const IDLE_POLL_INTERVAL_MS: u64 = 500;
