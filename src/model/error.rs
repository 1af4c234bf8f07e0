//! Error types for the typeahead application.
//!
//! This module defines a hierarchical error taxonomy using `thiserror`. Errors compose
//! via `?` and `From` conversions.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level application error wrapping all domain-specific failures
//!   - [`InputError`] - Candidate list loading failures (missing file, bad JSON, duplicate slugs)
//!   - [`ConfigError`](crate::config::ConfigError) - Config file and value validation failures
//!   - `std::io::Error` - Terminal/TUI rendering failures
//! - [`EngineError`] - Caller errors against the search engine (never fatal)
//!
//! # Recovery Strategy
//!
//! Input and config errors are fatal at startup: the picker cannot run without a valid
//! candidate list and a valid debounce delay. Engine errors are reported to the caller,
//! logged, and otherwise ignored - the engine state is left untouched.

use crate::model::record::{InvalidRecord, Slug};
use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error encompassing all failure modes.
///
/// # Examples
///
/// ```no_run
/// use typeahead::model::error::{AppError, InputError};
///
/// fn run_app() -> Result<(), AppError> {
///     // InputError automatically converts to AppError via From
///     let _candidates = load()?;
///     Ok(())
/// }
/// # fn load() -> Result<(), InputError> { Ok(()) }
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Failed to load the candidate list.
    ///
    /// **Recovery**: Display error to user and exit. The picker has nothing to search.
    #[error("Failed to load candidates: {0}")]
    Input(#[from] InputError),

    /// Configuration could not be loaded or failed validation.
    ///
    /// **Recovery**: Display error showing the offending source and exit.
    #[error("Invalid configuration: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Terminal or TUI rendering error.
    ///
    /// **Recovery**: Attempt graceful terminal cleanup, then exit.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Errors encountered when loading the candidate list.
#[derive(Debug, Error)]
pub enum InputError {
    /// The specified candidate file does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use typeahead::model::error::InputError;
    ///
    /// let err = InputError::FileNotFound {
    ///     path: PathBuf::from("/tmp/missing.json")
    /// };
    /// assert!(err.to_string().contains("/tmp/missing.json"));
    /// ```
    #[error("File not found: {path}")]
    FileNotFound {
        /// The filesystem path that was not found.
        path: PathBuf,
    },

    /// The candidate data is not a valid JSON array of records.
    #[error("Invalid candidate JSON: {message}")]
    InvalidJson {
        /// Parser error message from `serde_json`.
        message: String,
    },

    /// A record failed validation (blank slug or name).
    #[error("Invalid record at index {index}: {source}")]
    InvalidRecord {
        /// Zero-based position in the input array.
        index: usize,
        /// Underlying validation error.
        #[source]
        source: InvalidRecord,
    },

    /// Two records share a slug. Identifiers must be unique within the list.
    ///
    /// # Examples
    ///
    /// ```
    /// use typeahead::model::Slug;
    /// use typeahead::model::error::InputError;
    ///
    /// let err = InputError::DuplicateSlug { slug: Slug::new("bob").unwrap() };
    /// assert!(err.to_string().contains("'bob'"));
    /// ```
    #[error("Duplicate slug '{slug}' in candidate list")]
    DuplicateSlug {
        /// The repeated slug.
        slug: Slug,
    },

    /// Generic I/O error reading the candidate file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Caller errors against the search engine.
///
/// These never corrupt engine state: the offending operation is rejected as a
/// whole, with no state change and no notification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A pick referenced a slug that is not in the candidate list.
    ///
    /// # Examples
    ///
    /// ```
    /// use typeahead::model::Slug;
    /// use typeahead::model::error::EngineError;
    ///
    /// let err = EngineError::UnknownRecord { slug: Slug::new("nobody").unwrap() };
    /// assert_eq!(err.to_string(), "No candidate with slug 'nobody'");
    /// ```
    #[error("No candidate with slug '{slug}'")]
    UnknownRecord {
        /// The slug that was picked.
        slug: Slug,
    },
}
