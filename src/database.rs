//! Typed view of the student database JSON.
//!
//! The on-disk document is an object mapping display names to per-student
//! objects. Each entry must carry an `admit_year` (string or number, both
//! normalised to a string key here) and may carry a nullable `major`. Every
//! other field is opaque and passed through verbatim, so the raw object is
//! kept alongside the parsed view.

use std::{fs, path::Path};

use anyhow::Context;
use serde_json::{Map, Value};
use thiserror::Error;

/// Bucket name used when an entry has no declared major.
pub const NO_MAJOR: &str = "No Major";

#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("malformed JSON: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("top-level JSON must be an object mapping names to entries")]
    NotAnObject,
    #[error("entry for {name:?} is not a JSON object")]
    EntryNotAnObject { name: String },
    #[error("entry for {name:?} is missing required field `admit_year`")]
    MissingAdmitYear { name: String },
    #[error("entry for {name:?} has a non-scalar `admit_year` ({value})")]
    InvalidAdmitYear { name: String, value: Value },
    #[error("entry for {name:?} has a non-string `major` ({value})")]
    InvalidMajor { name: String, value: Value },
}

/// One student record.
#[derive(Debug, Clone)]
pub struct Entry {
    name: String,
    admit_year: String,
    major: Option<String>,
    raw: Map<String, Value>,
}

impl Entry {
    fn parse(name: &str, value: &Value) -> Result<Self, DatabaseError> {
        let raw = value
            .as_object()
            .ok_or_else(|| DatabaseError::EntryNotAnObject {
                name: name.to_string(),
            })?;

        // admit_year arrives as a string in some entries and a number in
        // others; both collapse to the same string key so that 2021 and
        // "2021" sort into one bucket.
        let admit_year = match raw.get("admit_year") {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            Some(other) => {
                return Err(DatabaseError::InvalidAdmitYear {
                    name: name.to_string(),
                    value: other.clone(),
                })
            }
            None => {
                return Err(DatabaseError::MissingAdmitYear {
                    name: name.to_string(),
                })
            }
        };

        let major = match raw.get("major") {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(other) => {
                return Err(DatabaseError::InvalidMajor {
                    name: name.to_string(),
                    value: other.clone(),
                })
            }
        };

        Ok(Self {
            name: name.to_string(),
            admit_year,
            major,
            raw: raw.clone(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Canonical string form of the admission year.
    pub fn admit_year(&self) -> &str {
        &self.admit_year
    }

    /// Declared major, or `None` for the [`NO_MAJOR`] bucket.
    pub fn major(&self) -> Option<&str> {
        self.major.as_deref()
    }

    /// The entry's original JSON object, untouched.
    pub fn raw(&self) -> &Map<String, Value> {
        &self.raw
    }
}

/// The whole database, entries in file order.
#[derive(Debug, Clone)]
pub struct Database {
    entries: Vec<Entry>,
}

impl Database {
    /// Read and validate the database file. Every entry is checked up front
    /// so later stages can no longer hit a missing-field error.
    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Self::from_json(&raw).with_context(|| format!("parsing {}", path.display()))
    }

    pub fn from_json(raw: &str) -> Result<Self, DatabaseError> {
        let document: Value = serde_json::from_str(raw)?;
        let map = document.as_object().ok_or(DatabaseError::NotAnObject)?;

        let mut entries = Vec::with_capacity(map.len());
        for (name, value) in map {
            entries.push(Entry::parse(name, value)?);
        }
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_entries_with_extra_fields() {
        let db = Database::from_json(
            r#"{
                "Amy Lee": {
                    "admit_year": "2021",
                    "major": "Math",
                    "writeup": "hello",
                    "linkedin_url": null
                }
            }"#,
        )
        .unwrap();

        assert_eq!(db.len(), 1);
        let entry = &db.entries()[0];
        assert_eq!(entry.name(), "Amy Lee");
        assert_eq!(entry.admit_year(), "2021");
        assert_eq!(entry.major(), Some("Math"));
        assert_eq!(entry.raw()["writeup"], "hello");
        assert_eq!(entry.raw()["linkedin_url"], Value::Null);
    }

    #[test]
    fn numeric_year_normalises_to_string() {
        let db = Database::from_json(
            r#"{"Bo Chen": {"admit_year": 2021, "major": null}}"#,
        )
        .unwrap();
        assert_eq!(db.entries()[0].admit_year(), "2021");
        assert_eq!(db.entries()[0].major(), None);
    }

    #[test]
    fn missing_admit_year_is_a_typed_error() {
        let err = Database::from_json(r#"{"Cy Diaz": {"major": "Math"}}"#)
            .unwrap_err();
        assert!(matches!(
            err,
            DatabaseError::MissingAdmitYear { ref name } if name == "Cy Diaz"
        ));
    }

    #[test]
    fn absent_major_defaults_like_null() {
        let db = Database::from_json(
            r#"{"Dee Park": {"admit_year": "2020"}}"#,
        )
        .unwrap();
        assert_eq!(db.entries()[0].major(), None);
    }

    #[test]
    fn rejects_non_object_documents() {
        assert!(matches!(
            Database::from_json("[1, 2, 3]").unwrap_err(),
            DatabaseError::NotAnObject
        ));
        assert!(matches!(
            Database::from_json("not json at all").unwrap_err(),
            DatabaseError::Malformed(_)
        ));
    }

    #[test]
    fn rejects_non_scalar_admit_year() {
        let err = Database::from_json(
            r#"{"Ed Roy": {"admit_year": ["2021"]}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, DatabaseError::InvalidAdmitYear { .. }));
    }
}
