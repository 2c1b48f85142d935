//! CSV catalog loading.
//!
//! The catalog collaborator: reads `(title, tags)` records from a CSV
//! file into an in-memory [`Catalog`] with stable indices. The core
//! never touches storage itself.

use anyhow::{Context, Result};
use mindrec_core::Catalog;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct CatalogRecord {
    title: String,
    /// Missing or empty tag cells are valid: the item simply has no tags.
    #[serde(default)]
    tags: Option<String>,
}

/// Load a catalog from a CSV file with `title` and `tags` columns.
///
/// Record order defines item indices. A row without tags yields an item
/// with an empty tag string, never an error.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog> {
    let path = path.as_ref();
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("failed to open catalog {}", path.display()))?;

    let mut records = Vec::new();
    for (line, result) in reader.deserialize::<CatalogRecord>().enumerate() {
        let record = result
            .with_context(|| format!("bad catalog record at line {}", line + 2))?;
        records.push((record.title, record.tags.unwrap_or_default()));
    }

    Ok(Catalog::from_records(records))
}
