//! Top-level entry point for running the overlay plotter as a native window.

use super::OverlayApp;
use crate::config::OverlayConfig;

/// Launch the overlay plot application in a native window.
///
/// The call blocks until the window is closed.
pub fn run_overlay(mut cfg: OverlayConfig) -> eframe::Result<()> {
    let title = cfg.title.clone();
    let mut opts = cfg.native_options.take().unwrap_or_default();

    // Set a bigger default window size if one is not provided by config.
    if opts.viewport.inner_size.is_none() {
        opts.viewport = opts
            .viewport
            .clone()
            .with_inner_size(egui::vec2(1400.0, 900.0));
    }

    let app = OverlayApp::new(cfg);
    eframe::run_native(&title, opts, Box::new(|_cc| Ok(Box::new(app))))
}
