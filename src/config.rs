//! Shared configuration for the overlay plot application.

use std::path::PathBuf;

use crate::ingest::HeaderStrategy;

/// Configuration handed to [`run_overlay`](crate::app::run_overlay).
///
/// Everything has a sensible default; construct with `..Default::default()`
/// and override what you need.
pub struct OverlayConfig {
    /// Window title.
    pub title: String,
    /// Most data columns selectable for the primary axis at once.
    pub max_primary_columns: usize,
    /// Header location applied until the user changes the controls.
    pub default_strategy: HeaderStrategy,
    /// CSV files to load at startup (e.g. from the command line).
    pub initial_files: Vec<PathBuf>,
    /// Override the eframe native options (window size etc.).
    pub native_options: Option<eframe::NativeOptions>,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            title: "CSV Overlay Plot".to_string(),
            max_primary_columns: 6,
            // Label on the second row, data from the third: the most common
            // layout among instrument exports with a units row up top.
            default_strategy: HeaderStrategy::ExplicitRows {
                label_row: 1,
                data_start_row: 2,
            },
            initial_files: Vec::new(),
            native_options: None,
        }
    }
}
