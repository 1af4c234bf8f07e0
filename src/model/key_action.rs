//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to key events.
///
/// These represent user intent, not specific keys. The mapping from
/// `crossterm::event::KeyEvent` to `KeyAction` is handled by `KeyBindings`;
/// printable characters that are not bound map to [`KeyAction::InsertChar`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Text editing
    /// Append a character to the query.
    InsertChar(char),
    /// Delete the last character of the query. Default: Backspace
    DeleteBackward,
    /// Clear the whole query. Default: Ctrl+u
    ClearInput,

    // Dropdown navigation
    /// Move the highlight down one row, wrapping. Default: Down/Ctrl+n
    HighlightNext,
    /// Move the highlight up one row, wrapping. Default: Up/Ctrl+p
    HighlightPrev,
    /// Pick the highlighted suggestion. Default: Enter
    PickHighlighted,

    // Focus
    /// Toggle input focus. Default: Tab
    ToggleFocus,
    /// Leave the input; quits when already unfocused. Default: Esc
    Blur,

    // Application
    /// Exit the application. Default: Ctrl+c
    Quit,
}
