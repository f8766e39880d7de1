use std::{
    fs,
    path::{Path, PathBuf},
};

use chrono::{DateTime, Utc};

use crate::errors::LedgerError;

pub const EXPORT_EXTENSION: &str = "csv";
const FILE_STAMP_FORMAT: &str = "%Y%m%d-%H%M%S";

/// Builds a filename that distinguishes repeated exports at second resolution.
pub fn export_file_name(prefix: &str, stamp: DateTime<Utc>) -> String {
    format!(
        "{prefix}-{}.{EXPORT_EXTENSION}",
        stamp.format(FILE_STAMP_FORMAT)
    )
}

/// Writes the export text atomically by staging to a temporary file, returning
/// the final path. Failures surface as recoverable I/O errors.
pub fn write_export(
    dir: &Path,
    prefix: &str,
    stamp: DateTime<Utc>,
    text: &str,
) -> Result<PathBuf, LedgerError> {
    let path = dir.join(export_file_name(prefix, stamp));
    let tmp = path.with_extension("tmp");
    fs::write(&tmp, text)?;
    fs::rename(&tmp, &path)?;
    tracing::info!(path = %path.display(), bytes = text.len(), "export written");
    Ok(path)
}
