//! Configuration file loading with precedence handling.

use super::DebounceDelay;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "TYPEAHEAD_CONFIG";

/// Environment variable overriding the debounce delay in milliseconds.
pub const DEBOUNCE_ENV_VAR: &str = "TYPEAHEAD_DEBOUNCE_MS";

/// Errors that can occur during config loading and validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permission issues, not a file, ...).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// Debounce delay below zero.
    #[error("Debounce delay must be >= 0 ms, got {0}")]
    NegativeDebounceDelay(i64),

    /// Environment variable present but not parseable.
    #[error("Invalid value for {var}: {value:?}")]
    InvalidEnvValue {
        /// Variable name.
        var: &'static str,
        /// Raw value found.
        value: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/typeahead/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Quiet period before typed text reaches the filter. Must be >= 0.
    #[serde(default)]
    pub debounce_delay_ms: Option<i64>,

    /// JSON file with the candidate list. Bundled dataset when absent.
    #[serde(default)]
    pub candidates_path: Option<PathBuf>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Validated debounce delay.
    pub debounce_delay: DebounceDelay,
    /// Candidate file, `None` for the bundled dataset.
    pub candidates_path: Option<PathBuf>,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            debounce_delay: DebounceDelay::default(),
            candidates_path: None,
            log_file_path: default_log_path(),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/typeahead/typeahead.log` on Unix-like systems,
/// or the platform state directory elsewhere.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("typeahead").join("typeahead.log")
    } else {
        PathBuf::from("typeahead.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/typeahead/config.toml` on Unix, appropriate path on other platforms.
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("typeahead").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `TYPEAHEAD_CONFIG` environment variable
/// 3. Default path `~/.config/typeahead/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
///
/// # Errors
///
/// Returns [`ConfigError::NegativeDebounceDelay`] for a negative delay.
pub fn merge_config(config_file: Option<ConfigFile>) -> Result<ResolvedConfig, ConfigError> {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return Ok(defaults);
    };

    let debounce_delay = match config.debounce_delay_ms {
        Some(ms) => DebounceDelay::from_millis(ms)?,
        None => defaults.debounce_delay,
    };

    Ok(ResolvedConfig {
        debounce_delay,
        candidates_path: config.candidates_path.or(defaults.candidates_path),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    })
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `TYPEAHEAD_DEBOUNCE_MS`: Override debounce delay
///
/// # Errors
///
/// Returns error if the variable is set but not a non-negative integer.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> Result<ResolvedConfig, ConfigError> {
    if let Ok(raw) = std::env::var(DEBOUNCE_ENV_VAR) {
        let ms: i64 = raw.trim().parse().map_err(|_| ConfigError::InvalidEnvValue {
            var: DEBOUNCE_ENV_VAR,
            value: raw.clone(),
        })?;
        config.debounce_delay = DebounceDelay::from_millis(ms)?;
    }

    Ok(config)
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
///
/// # Errors
///
/// Returns [`ConfigError::NegativeDebounceDelay`] for a negative delay.
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    debounce_override: Option<i64>,
    candidates_override: Option<PathBuf>,
) -> Result<ResolvedConfig, ConfigError> {
    if let Some(ms) = debounce_override {
        config.debounce_delay = DebounceDelay::from_millis(ms)?;
    }

    if let Some(path) = candidates_override {
        config.candidates_path = Some(path);
    }

    Ok(config)
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
