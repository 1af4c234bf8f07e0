//! Candidate list sources.
//!
//! The candidate list is read once at startup, either from a JSON file or
//! from the dataset bundled into the binary. Records are validated at this
//! boundary; the engine only ever sees well-formed, uniquely-slugged records.

use crate::model::error::InputError;
use crate::model::{RawRecord, Record};
use std::collections::HashSet;
use std::path::Path;
use tracing::info;

/// People dataset shipped with the binary.
pub const BUNDLED_PEOPLE: &str = include_str!("../../data/people.json");

/// Load the candidate list from `path`, or the bundled dataset when `None`.
///
/// # Errors
///
/// Returns `InputError::FileNotFound` if `path` does not exist, and any
/// error from [`parse_candidates`].
pub fn load_candidates(path: Option<&Path>) -> Result<Vec<Record>, InputError> {
    let candidates = match path {
        Some(path) => {
            if !path.exists() {
                return Err(InputError::FileNotFound {
                    path: path.to_path_buf(),
                });
            }
            let contents = std::fs::read_to_string(path)?;
            parse_candidates(&contents)?
        }
        None => parse_candidates(BUNDLED_PEOPLE)?,
    };

    info!(
        count = candidates.len(),
        source = %path.map_or("bundled".into(), |p| p.display().to_string()),
        "Candidates loaded"
    );
    Ok(candidates)
}

/// Parse a JSON array of records, preserving order.
///
/// # Errors
///
/// - `InputError::InvalidJson` if the text is not an array of record objects
/// - `InputError::InvalidRecord` for a blank slug or name
/// - `InputError::DuplicateSlug` if two records share a slug
pub fn parse_candidates(json: &str) -> Result<Vec<Record>, InputError> {
    let raw: Vec<RawRecord> = serde_json::from_str(json).map_err(|e| InputError::InvalidJson {
        message: e.to_string(),
    })?;

    let mut seen = HashSet::with_capacity(raw.len());
    let mut records = Vec::with_capacity(raw.len());

    for (index, raw_record) in raw.into_iter().enumerate() {
        let record = Record::try_from(raw_record)
            .map_err(|source| InputError::InvalidRecord { index, source })?;

        if !seen.insert(record.slug().clone()) {
            return Err(InputError::DuplicateSlug {
                slug: record.slug().clone(),
            });
        }
        records.push(record);
    }

    Ok(records)
}
