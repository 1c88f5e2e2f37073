//! Regrouping of the database into admit year -> major -> students.

use std::{
    collections::BTreeMap,
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::database::{Database, Entry, NO_MAJOR};

/// Year -> major -> students, each student a one-key `{name: entry}` object.
/// Both `BTreeMap` levels make the ascending key order a structural property
/// of the serialized output rather than something a consumer has to re-sort.
pub type SortedDatabase = BTreeMap<String, BTreeMap<String, Vec<Map<String, Value>>>>;

/// Group entries by admit year, then major, with students name-ascending
/// inside each bucket. Entries without a major land under `"No Major"`.
pub fn sort_database(db: &Database) -> SortedDatabase {
    let mut by_name: Vec<&Entry> = db.entries().iter().collect();
    by_name.sort_by(|a, b| a.name().cmp(b.name()));

    let mut grouped = SortedDatabase::new();
    for entry in by_name {
        let major = entry.major().unwrap_or(NO_MAJOR).to_string();
        let mut wrapper = Map::new();
        wrapper.insert(
            entry.name().to_string(),
            Value::Object(entry.raw().clone()),
        );
        grouped
            .entry(entry.admit_year().to_string())
            .or_default()
            .entry(major)
            .or_default()
            .push(wrapper);
    }
    grouped
}

/// Serialize the sorted database to `path` as 4-space-indented JSON,
/// overwriting whatever is there.
pub fn write_sorted(sorted: &SortedDatabase, path: &Path) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    // serde_json's default pretty indent is 2 spaces; the consumer of this
    // file expects 4.
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut writer, formatter);
    sorted
        .serialize(&mut ser)
        .with_context(|| format!("writing {}", path.display()))?;
    writer
        .flush()
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
