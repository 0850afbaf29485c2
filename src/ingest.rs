//! CSV ingestion: turning one uploaded file into a tagged, named-column table.
//!
//! Input files are not assumed to have a standard single-header-row layout.
//! A [`HeaderStrategy`] tells the ingestor which row carries the column names
//! and where the data rows begin; everything is addressed by 0-based row index
//! over the parsed CSV records.

use std::path::Path;

use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Name of the synthetic column tagging every row with its originating file.
pub const SOURCE_COLUMN: &str = "__source__";

/// Name of the shared time-axis column every usable table must carry.
pub const TIME_COLUMN: &str = "Time";

/// Where in a raw CSV the column names and the data rows are located.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeaderStrategy {
    /// Column names come from `label_row`; data runs from `data_start_row`
    /// (inclusive) to the end of the file. Rows strictly between the two are
    /// dropped. Both indices are independently user-supplied with no ordering
    /// enforced: `data_start_row <= label_row` is accepted as-is, since rows
    /// are treated purely by index.
    ExplicitRows {
        label_row: usize,
        data_start_row: usize,
    },
    /// The first `count` rows are discarded entirely; the next row is the
    /// header and everything after it is data.
    SkipRows { count: usize },
}

impl HeaderStrategy {
    /// Resolve to a `(label_row, data_start_row)` pair over the record list.
    fn resolve(self) -> (usize, usize) {
        match self {
            HeaderStrategy::ExplicitRows {
                label_row,
                data_start_row,
            } => (label_row, data_start_row),
            HeaderStrategy::SkipRows { count } => (count, count + 1),
        }
    }
}

/// Ingestion failure for a single file. The caller is expected to surface it
/// as a per-file warning and continue with the rest of the batch.
#[derive(Debug, Error)]
pub enum IngestError {
    /// The content is not parseable CSV, or the rows the strategy asks for
    /// lie beyond the file's actual row count.
    #[error("{file}: {cause}")]
    MalformedInput { file: String, cause: String },
}

impl IngestError {
    fn malformed(file: &str, cause: impl ToString) -> Self {
        IngestError::MalformedInput {
            file: file.to_string(),
            cause: cause.to_string(),
        }
    }

    /// Name of the file this error belongs to.
    pub fn file(&self) -> &str {
        match self {
            IngestError::MalformedInput { file, .. } => file,
        }
    }
}

/// One parsed file: named columns plus the source tag attached to every row.
///
/// The source tag is a real column ([`SOURCE_COLUMN`], always last) so that a
/// table round-trips as ordinary tabular data; `source` keeps the tag
/// available even for a table with zero data rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedTable {
    /// Column names as claimed by the file's label row, with
    /// [`SOURCE_COLUMN`] appended.
    pub columns: Vec<String>,
    /// Data rows, cell-aligned to `columns`.
    pub rows: Vec<Vec<String>>,
    /// File name of origin, identical for every row.
    pub source: String,
}

impl TaggedTable {
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    /// Cells of column `name` in row order, or `None` if this table lacks the
    /// column. Duplicate names resolve to the first occurrence.
    pub fn column<'a>(&'a self, name: &str) -> Option<impl Iterator<Item = &'a str> + 'a> {
        let idx = self.columns.iter().position(|c| c == name)?;
        Some(
            self.rows
                .iter()
                .map(move |row| row.get(idx).map(String::as_str).unwrap_or("")),
        )
    }
}

/// Parse one uploaded file into a [`TaggedTable`].
///
/// `name` is used both as the source tag and in error messages. Cells are
/// whitespace-trimmed; ragged rows are tolerated, with missing cells read as
/// empty strings and cells beyond the label row's width ignored.
pub fn ingest(name: &str, bytes: &[u8], strategy: HeaderStrategy) -> Result<TaggedTable, IngestError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(bytes);

    let mut records = Vec::new();
    for record in reader.records() {
        records.push(record.map_err(|e| IngestError::malformed(name, e))?);
    }

    let (label_row, data_start_row) = strategy.resolve();
    if label_row >= records.len() {
        return Err(IngestError::malformed(
            name,
            format!(
                "label row {} is beyond the file (only {} rows)",
                label_row,
                records.len()
            ),
        ));
    }
    if data_start_row > records.len() {
        return Err(IngestError::malformed(
            name,
            format!(
                "data start row {} is beyond the file (only {} rows)",
                data_start_row,
                records.len()
            ),
        ));
    }

    let mut columns: Vec<String> = records[label_row].iter().map(str::to_string).collect();
    let width = columns.len();
    columns.push(SOURCE_COLUMN.to_string());

    let rows = records[data_start_row..]
        .iter()
        .map(|record| {
            let mut row: Vec<String> = (0..width)
                .map(|i| record.get(i).unwrap_or("").to_string())
                .collect();
            row.push(name.to_string());
            row
        })
        .collect();

    Ok(TaggedTable {
        columns,
        rows,
        source: name.to_string(),
    })
}

/// Read a file from disk and ingest it, using its file name as the source tag.
pub fn ingest_path(path: &Path, strategy: HeaderStrategy) -> Result<TaggedTable, IngestError> {
    let name = source_name(path);
    let bytes = std::fs::read(path).map_err(|e| IngestError::malformed(&name, e))?;
    ingest(&name, &bytes, strategy)
}

/// The source tag for a path: its file name, falling back to the full path.
pub fn source_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
