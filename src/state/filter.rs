//! Candidate filtering (pure).
//!
//! Case-insensitive substring matching over display names. No ranking,
//! no fuzzy matching: the input order of the candidate list is preserved.

use crate::model::Record;

/// Return every candidate whose display name contains `query`, ignoring case.
///
/// Case folding is `str::to_lowercase` on both sides. The query is not
/// trimmed here; an empty query matches every candidate. Callers that treat
/// blank queries specially (see `SearchEngine::visible_set`) must do so
/// before calling.
pub fn filter_candidates<'a>(candidates: &'a [Record], query: &str) -> Vec<&'a Record> {
    let query_lower = query.to_lowercase();

    candidates
        .iter()
        .filter(|record| matches_query(record, &query_lower))
        .collect()
}

/// Check one record against an already-lowercased query.
fn matches_query(record: &Record, query_lower: &str) -> bool {
    record.name().as_str().to_lowercase().contains(query_lower)
}
