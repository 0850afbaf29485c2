//! Batch bookkeeping for one render cycle.
//!
//! Files are ingested sequentially in upload order (that order determines
//! trace order later). A file that fails to parse, or parses without a `Time`
//! column, is dropped with exactly one warning; the rest of the batch
//! continues. Nothing here is fatal.

use std::fmt;
use std::path::PathBuf;

use tracing::warn;

use crate::ingest::{self, HeaderStrategy, IngestError, TaggedTable, TIME_COLUMN};

/// Why a file was left out of the current session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileWarning {
    /// CSV parsing failed, or the requested rows were out of bounds.
    Malformed { file: String, cause: String },
    /// The file parsed, but no `Time` column resulted.
    MissingTimeColumn { file: String },
}

impl FileWarning {
    /// Name of the dropped file.
    pub fn file(&self) -> &str {
        match self {
            FileWarning::Malformed { file, .. } => file,
            FileWarning::MissingTimeColumn { file } => file,
        }
    }
}

impl fmt::Display for FileWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileWarning::Malformed { file, cause } => {
                write!(f, "{file}: {cause} (file skipped)")
            }
            FileWarning::MissingTimeColumn { file } => {
                write!(f, "{file}: no '{TIME_COLUMN}' column found (file skipped)")
            }
        }
    }
}

/// Tables that survived ingestion, plus one warning per dropped file.
#[derive(Debug, Default)]
pub struct LoadOutcome {
    pub tables: Vec<TaggedTable>,
    pub warnings: Vec<FileWarning>,
}

/// Ingest in-memory `(name, bytes)` files under one header strategy.
pub fn load_files(files: &[(String, Vec<u8>)], strategy: HeaderStrategy) -> LoadOutcome {
    let mut out = LoadOutcome::default();
    for (name, bytes) in files {
        match ingest::ingest(name, bytes, strategy) {
            Ok(table) if table.has_column(TIME_COLUMN) => out.tables.push(table),
            Ok(_) => {
                warn!(file = %name, "no '{}' column after ingestion, skipping file", TIME_COLUMN);
                out.warnings.push(FileWarning::MissingTimeColumn { file: name.clone() });
            }
            Err(IngestError::MalformedInput { file, cause }) => {
                warn!(file = %file, %cause, "failed to ingest file, skipping");
                out.warnings.push(FileWarning::Malformed { file, cause });
            }
        }
    }
    out
}

/// Read files from disk and hand them to [`load_files`] semantics.
///
/// An unreadable path is reported the same way as a malformed file.
pub fn load_paths(paths: &[PathBuf], strategy: HeaderStrategy) -> LoadOutcome {
    let mut out = LoadOutcome::default();
    for path in paths {
        match ingest::ingest_path(path, strategy) {
            Ok(table) if table.has_column(TIME_COLUMN) => out.tables.push(table),
            Ok(table) => {
                warn!(file = %table.source, "no '{}' column after ingestion, skipping file", TIME_COLUMN);
                out.warnings.push(FileWarning::MissingTimeColumn { file: table.source });
            }
            Err(IngestError::MalformedInput { file, cause }) => {
                warn!(file = %file, %cause, "failed to ingest file, skipping");
                out.warnings.push(FileWarning::Malformed { file, cause });
            }
        }
    }
    out
}
