//! Overplot crate root: re-exports and module wiring.
//!
//! Overplot loads multiple CSV files with heterogeneous headers, aligns them
//! on a shared `Time` axis and plots the selected columns as an interactive
//! multi-series line chart with an optional secondary Y axis.
//!
//! Module map:
//! - `ingest`: per-file CSV parsing under a header-location strategy
//! - `session`: batch loading with per-file warning recovery
//! - `compose`: merging tagged tables into a chart specification
//! - `config`: application configuration
//! - `persistence`: saving/restoring session settings
//! - `app`: the egui/eframe UI and the `run_overlay` entry point

pub mod app;
pub mod compose;
pub mod config;
pub mod ingest;
pub mod persistence;
pub mod session;

// Public re-exports for a compact external API
pub use app::run_overlay;
pub use compose::{
    column_universe, compose, ChartLayout, ChartSpec, ComposeError, TraceSpec, YAxis,
};
pub use config::OverlayConfig;
pub use ingest::{
    ingest, ingest_path, HeaderStrategy, IngestError, TaggedTable, SOURCE_COLUMN, TIME_COLUMN,
};
pub use persistence::{load_settings, save_settings, SessionSettings};
pub use session::{load_files, load_paths, FileWarning, LoadOutcome};
