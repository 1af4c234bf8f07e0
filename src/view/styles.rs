//! Picker styling configuration.
//!
//! Provides distinct styles for the input box, dropdown rows and the
//! no-matches notice, with a monochrome fallback.

use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Explicit configuration, ignoring the environment.
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== PickerStyles =====

/// Styles used by the picker widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickerStyles {
    /// Border of the focused input box.
    pub focused_border: Style,
    /// Border of the unfocused input box.
    pub unfocused_border: Style,
    /// Plain dropdown row.
    pub suggestion: Style,
    /// Highlighted dropdown row.
    pub highlighted: Style,
    /// "No matching suggestions" notice.
    pub no_matches: Style,
    /// Selection header.
    pub header: Style,
}

impl PickerStyles {
    /// Styles for the given color configuration.
    ///
    /// Without colors, emphasis relies on modifiers only.
    pub fn with_color_config(config: ColorConfig) -> Self {
        if config.colors_enabled() {
            Self {
                focused_border: Style::default().fg(Color::Cyan),
                unfocused_border: Style::default().fg(Color::DarkGray),
                suggestion: Style::default().fg(Color::Blue),
                highlighted: Style::default()
                    .bg(Color::Blue)
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
                no_matches: Style::default().fg(Color::Red),
                header: Style::default().add_modifier(Modifier::BOLD),
            }
        } else {
            Self {
                focused_border: Style::default().add_modifier(Modifier::BOLD),
                unfocused_border: Style::default(),
                suggestion: Style::default(),
                highlighted: Style::default().add_modifier(Modifier::REVERSED),
                no_matches: Style::default().add_modifier(Modifier::BOLD),
                header: Style::default().add_modifier(Modifier::BOLD),
            }
        }
    }
}

impl Default for PickerStyles {
    fn default() -> Self {
        Self::with_color_config(ColorConfig::from_env_and_args(false))
    }
}
