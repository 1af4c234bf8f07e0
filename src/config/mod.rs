//! Configuration module.

pub mod keybindings;
pub mod loader;

pub use keybindings::KeyBindings;
pub use loader::{
    apply_cli_overrides, apply_env_overrides, default_config_path, default_log_path,
    load_config_file, load_config_with_precedence, merge_config, ConfigError, ConfigFile,
    ResolvedConfig,
};

use std::time::Duration;

/// Default quiet period before typed text reaches the filter.
pub const DEFAULT_DEBOUNCE_DELAY_MS: u64 = 300;

/// Validated debounce delay. Never negative.
///
/// Raw values come from TOML, env vars and the CLI as signed integers so a
/// negative value can be reported instead of wrapping or being clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceDelay(u64);

impl DebounceDelay {
    /// Smart constructor: rejects negative delays.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NegativeDebounceDelay`] for `ms < 0`.
    pub fn from_millis(ms: i64) -> Result<Self, ConfigError> {
        u64::try_from(ms)
            .map(Self)
            .map_err(|_| ConfigError::NegativeDebounceDelay(ms))
    }

    /// Delay in milliseconds.
    pub fn as_millis(self) -> u64 {
        self.0
    }

    /// Delay as a `Duration`.
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for DebounceDelay {
    fn default() -> Self {
        Self(DEFAULT_DEBOUNCE_DELAY_MS)
    }
}
