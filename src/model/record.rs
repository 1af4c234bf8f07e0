//! Candidate records and their identifier newtypes.
//!
//! Identifiers validate non-empty strings at construction time.
//! Raw constructors are never exported - use smart constructors only.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;

/// Stable, unique identifier of a candidate record (e.g., "carolus-haverbeke-1832").
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Slug(String);

impl Slug {
    /// Smart constructor: validates non-blank slug.
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidSlug> {
        let s = raw.into();
        if s.trim().is_empty() {
            Err(InvalidSlug::Empty)
        } else {
            Ok(Self(s))
        }
    }

    /// Borrow the slug text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Human-readable name shown in the input box and dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DisplayName(String);

impl DisplayName {
    /// Smart constructor: validates non-blank name.
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidDisplayName> {
        let s = raw.into();
        if s.trim().is_empty() {
            Err(InvalidDisplayName::Empty)
        } else {
            Ok(Self(s))
        }
    }

    /// Borrow the name text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DisplayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Birth and death years, shown next to a selected name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lifespan {
    /// Year of birth.
    pub born: i32,
    /// Year of death.
    pub died: i32,
}

/// A candidate entity the user can pick.
///
/// Only `slug` and `name` are meaningful to the search engine. `lifespan`
/// and `extra` travel along for display and for the selection payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    slug: Slug,
    name: DisplayName,
    lifespan: Option<Lifespan>,
    extra: BTreeMap<String, serde_json::Value>,
}

impl Record {
    /// Create a record without extra display fields.
    pub fn new(slug: Slug, name: DisplayName, lifespan: Option<Lifespan>) -> Self {
        Self {
            slug,
            name,
            lifespan,
            extra: BTreeMap::new(),
        }
    }

    /// Attach opaque display fields.
    pub fn with_extra(mut self, extra: BTreeMap<String, serde_json::Value>) -> Self {
        self.extra = extra;
        self
    }

    /// Unique identifier.
    pub fn slug(&self) -> &Slug {
        &self.slug
    }

    /// Display name.
    pub fn name(&self) -> &DisplayName {
        &self.name
    }

    /// Lifespan, when both years are known.
    pub fn lifespan(&self) -> Option<Lifespan> {
        self.lifespan
    }

    /// Opaque fields carried through from the input data.
    pub fn extra(&self) -> &BTreeMap<String, serde_json::Value> {
        &self.extra
    }

    /// Label used for the "selected" header: `Name (born - died)`.
    pub fn label(&self) -> String {
        match self.lifespan {
            Some(Lifespan { born, died }) => format!("{} ({} - {})", self.name, born, died),
            None => self.name.to_string(),
        }
    }
}

/// Wire shape of a record in a candidate JSON file.
///
/// Parse at the boundary, then validate via `TryFrom` into [`Record`].
#[derive(Debug, Deserialize)]
pub struct RawRecord {
    slug: String,
    name: String,
    #[serde(default)]
    born: Option<i32>,
    #[serde(default)]
    died: Option<i32>,
    #[serde(flatten)]
    extra: BTreeMap<String, serde_json::Value>,
}

impl TryFrom<RawRecord> for Record {
    type Error = InvalidRecord;

    fn try_from(raw: RawRecord) -> Result<Self, Self::Error> {
        let slug = Slug::new(raw.slug)?;
        let name = DisplayName::new(raw.name).map_err(|source| InvalidRecord::Name {
            slug: slug.clone(),
            source,
        })?;
        let lifespan = match (raw.born, raw.died) {
            (Some(born), Some(died)) => Some(Lifespan { born, died }),
            _ => None,
        };

        Ok(Record::new(slug, name, lifespan).with_extra(raw.extra))
    }
}

// ===== Error Types =====

/// Slug validation failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidSlug {
    /// Slug was empty or whitespace-only.
    #[error("Slug cannot be empty")]
    Empty,
}

/// Display name validation failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidDisplayName {
    /// Name was empty or whitespace-only.
    #[error("Display name cannot be empty")]
    Empty,
}

/// Record validation failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidRecord {
    /// The record's slug is invalid.
    #[error(transparent)]
    Slug(#[from] InvalidSlug),

    /// The record's name is invalid.
    #[error("Record {slug}: {source}")]
    Name {
        /// Slug of the offending record.
        slug: Slug,
        /// Underlying name error.
        #[source]
        source: InvalidDisplayName,
    },
}

// ===== Tests =====
