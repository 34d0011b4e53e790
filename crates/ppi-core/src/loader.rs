//! Record loader: raw TSV file → typed [`RawInteractionRecord`]s.
//!
//! The file must be UTF-8, tab-separated, with a header row naming at least
//! the ten required columns (see [`RawInteractionRecord`]). Columns the
//! pipeline does not recognize are ignored. `confidence_value` is parsed as
//! a float here; no other column is coerced.

use std::path::Path;

use tracing::{debug, instrument};

use crate::error::{PpiError, Result};
use crate::record::RawInteractionRecord;

/// Load all interaction rows from a tab-separated file.
///
/// # Errors
///
/// - [`PpiError::NotFound`] when `path` is not an existing regular file.
/// - [`PpiError::Parse`] when a row is malformed, a required column is
///   missing, or `confidence_value` is not numeric.
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<RawInteractionRecord>> {
    let path = path.as_ref();

    if !path.is_file() {
        return Err(PpiError::NotFound(format!(
            "source file {}",
            path.display()
        )));
    }

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .from_path(path)
        .map_err(|e| PpiError::Parse(format!("{}: {e}", path.display())))?;

    let mut records = Vec::new();
    for row in reader.deserialize() {
        let record: RawInteractionRecord =
            row.map_err(|e| PpiError::Parse(format!("{}: {e}", path.display())))?;
        records.push(record);
    }

    debug!(rows = records.len(), "loaded interaction records");
    Ok(records)
}
