//! Session-settings persistence: save and load to/from JSON files.
//!
//! Only the settings worth carrying across sessions are persisted — how to
//! read the files (header strategy) and what to plot (column selections).
//! Uploaded data itself is never written to disk.

use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ingest::HeaderStrategy;

/// The persistable subset of the UI state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSettings {
    pub strategy: HeaderStrategy,
    pub primary_columns: Vec<String>,
    pub secondary_columns: Vec<String>,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            strategy: HeaderStrategy::ExplicitRows {
                label_row: 1,
                data_start_row: 2,
            },
            primary_columns: Vec::new(),
            secondary_columns: Vec::new(),
        }
    }
}

/// Write settings as pretty-printed JSON.
pub fn save_settings<P: AsRef<Path>>(path: P, settings: &SessionSettings) -> io::Result<()> {
    let json = serde_json::to_string_pretty(settings).map_err(io::Error::other)?;
    std::fs::write(path, json)
}

/// Read settings back from a JSON file produced by [`save_settings`].
pub fn load_settings<P: AsRef<Path>>(path: P) -> io::Result<SessionSettings> {
    let json = std::fs::read_to_string(path)?;
    serde_json::from_str(&json).map_err(io::Error::other)
}
