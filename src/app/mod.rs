//! Interactive UI: file selection, header-location inputs, column pickers and
//! the rendered overlay chart.

mod plot_view;
mod run;
mod ui;

pub use run::run_overlay;

use std::path::PathBuf;

use tracing::{info, warn};

use crate::compose::{self, ChartSpec, ComposeError};
use crate::config::OverlayConfig;
use crate::ingest::{self, HeaderStrategy};
use crate::persistence::SessionSettings;
use crate::session::{self, LoadOutcome};

/// Which header-location variant the controls are driving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StrategyMode {
    ExplicitRows,
    SkipRows,
}

/// Application state.
///
/// Tables, the column universe and the chart are derived state: they are
/// rebuilt from the retained file bytes whenever the file set or the header
/// strategy changes, and the chart only on an explicit plot request.
pub struct OverlayApp {
    pub(crate) title: String,
    pub(crate) max_primary_columns: usize,

    /// Uploaded files in upload order; bytes are retained so a strategy
    /// change re-ingests without touching the disk again.
    pub(crate) files: Vec<(String, Vec<u8>)>,
    /// Paths that could not be read at pick time.
    pub(crate) read_errors: Vec<String>,

    pub(crate) mode: StrategyMode,
    pub(crate) label_row: usize,
    pub(crate) data_start_row: usize,
    pub(crate) skip_rows: usize,

    pub(crate) outcome: LoadOutcome,
    pub(crate) universe: Vec<String>,
    /// Click-order selections; the order feeds straight into trace order.
    pub(crate) primary_columns: Vec<String>,
    pub(crate) secondary_columns: Vec<String>,

    pub(crate) chart: Option<ChartSpec>,
    /// True for the first frame after composing, to reset the plot view.
    pub(crate) chart_is_fresh: bool,
    pub(crate) compose_warning: Option<String>,

    pub(crate) request_window_shot: bool,
}

impl OverlayApp {
    pub fn new(cfg: OverlayConfig) -> Self {
        let (mode, label_row, data_start_row, skip_rows) = match cfg.default_strategy {
            HeaderStrategy::ExplicitRows {
                label_row,
                data_start_row,
            } => (StrategyMode::ExplicitRows, label_row, data_start_row, 0),
            HeaderStrategy::SkipRows { count } => (StrategyMode::SkipRows, 1, 2, count),
        };
        let mut app = Self {
            title: cfg.title,
            max_primary_columns: cfg.max_primary_columns,
            files: Vec::new(),
            read_errors: Vec::new(),
            mode,
            label_row,
            data_start_row,
            skip_rows,
            outcome: LoadOutcome::default(),
            universe: Vec::new(),
            primary_columns: Vec::new(),
            secondary_columns: Vec::new(),
            chart: None,
            chart_is_fresh: false,
            compose_warning: None,
            request_window_shot: false,
        };
        if !cfg.initial_files.is_empty() {
            app.add_paths(&cfg.initial_files);
        }
        app
    }

    /// The header strategy currently described by the controls.
    pub(crate) fn strategy(&self) -> HeaderStrategy {
        match self.mode {
            StrategyMode::ExplicitRows => HeaderStrategy::ExplicitRows {
                label_row: self.label_row,
                data_start_row: self.data_start_row,
            },
            StrategyMode::SkipRows => HeaderStrategy::SkipRows {
                count: self.skip_rows,
            },
        }
    }

    /// Read the given paths into memory and append them to the upload set.
    pub(crate) fn add_paths(&mut self, paths: &[PathBuf]) {
        for path in paths {
            let name = ingest::source_name(path);
            match std::fs::read(path) {
                Ok(bytes) => self.files.push((name, bytes)),
                Err(e) => {
                    warn!(file = %name, error = %e, "could not read file");
                    self.read_errors.push(format!("{name}: {e}"));
                }
            }
        }
        self.rebuild_tables();
    }

    pub(crate) fn clear_files(&mut self) {
        self.files.clear();
        self.read_errors.clear();
        self.rebuild_tables();
    }

    /// Re-ingest every retained file under the current strategy and refresh
    /// the selectable column universe. The chart is dropped; plotting is an
    /// explicit action.
    pub(crate) fn rebuild_tables(&mut self) {
        self.outcome = session::load_files(&self.files, self.strategy());
        self.universe = compose::column_universe(&self.outcome.tables);
        self.primary_columns.retain(|c| self.universe.contains(c));
        self.secondary_columns.retain(|c| self.universe.contains(c));
        self.chart = None;
        self.chart_is_fresh = false;
        self.compose_warning = None;
    }

    pub(crate) fn render_chart(&mut self) {
        match compose::compose(
            &self.outcome.tables,
            &self.primary_columns,
            &self.secondary_columns,
        ) {
            Ok(spec) => {
                self.chart = Some(spec);
                self.chart_is_fresh = true;
                self.compose_warning = None;
            }
            Err(ComposeError::NoSeriesSelected) => {
                self.chart = None;
                self.compose_warning =
                    Some("Select at least one data column to plot.".to_string());
            }
        }
    }

    pub(crate) fn toggle_primary(&mut self, name: &str) {
        if let Some(pos) = self.primary_columns.iter().position(|c| c == name) {
            self.primary_columns.remove(pos);
        } else if self.primary_columns.len() < self.max_primary_columns {
            self.primary_columns.push(name.to_string());
        }
    }

    pub(crate) fn toggle_secondary(&mut self, name: &str) {
        if let Some(pos) = self.secondary_columns.iter().position(|c| c == name) {
            self.secondary_columns.remove(pos);
        } else {
            self.secondary_columns.push(name.to_string());
        }
    }

    pub(crate) fn settings(&self) -> SessionSettings {
        SessionSettings {
            strategy: self.strategy(),
            primary_columns: self.primary_columns.clone(),
            secondary_columns: self.secondary_columns.clone(),
        }
    }

    pub(crate) fn apply_settings(&mut self, settings: SessionSettings) {
        match settings.strategy {
            HeaderStrategy::ExplicitRows {
                label_row,
                data_start_row,
            } => {
                self.mode = StrategyMode::ExplicitRows;
                self.label_row = label_row;
                self.data_start_row = data_start_row;
            }
            HeaderStrategy::SkipRows { count } => {
                self.mode = StrategyMode::SkipRows;
                self.skip_rows = count;
            }
        }
        self.rebuild_tables();
        self.primary_columns = settings
            .primary_columns
            .into_iter()
            .filter(|c| self.universe.contains(c))
            .take(self.max_primary_columns)
            .collect();
        self.secondary_columns = settings
            .secondary_columns
            .into_iter()
            .filter(|c| self.universe.contains(c))
            .collect();
    }

    /// Deferred window screenshot: request on one frame, collect the
    /// resulting `Event::Screenshot` on a later one and offer a save dialog.
    fn handle_screenshot(&mut self, ctx: &egui::Context) {
        if self.request_window_shot {
            self.request_window_shot = false;
            ctx.send_viewport_cmd(egui::ViewportCommand::Screenshot(Default::default()));
        }

        if let Some(image_arc) = ctx.input(|i| {
            i.events.iter().rev().find_map(|e| match e {
                egui::Event::Screenshot { image, .. } => Some(image.clone()),
                _ => None,
            })
        }) {
            let default_name = format!(
                "overplot_{}.png",
                chrono::Local::now().format("%Y%m%d_%H%M%S")
            );
            if let Some(path) = rfd::FileDialog::new()
                .set_file_name(&default_name)
                .save_file()
            {
                let egui::ColorImage {
                    size: [w, h],
                    pixels,
                    ..
                } = &*image_arc;
                let mut out = image::RgbaImage::new(*w as u32, *h as u32);
                for y in 0..*h {
                    for x in 0..*w {
                        let p = pixels[y * *w + x];
                        out.put_pixel(
                            x as u32,
                            y as u32,
                            image::Rgba([p.r(), p.g(), p.b(), p.a()]),
                        );
                    }
                }
                match out.save(&path) {
                    Ok(()) => info!(path = %path.display(), "saved window screenshot"),
                    Err(e) => warn!(error = %e, "failed to save window screenshot"),
                }
            }
        }
    }
}

impl eframe::App for OverlayApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ui::draw(self, ctx);
        self.handle_screenshot(ctx);
    }
}
