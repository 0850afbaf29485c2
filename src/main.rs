use std::path::PathBuf;

use overplot::{run_overlay, OverlayConfig};
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> eframe::Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();

    // CSV paths given on the command line are loaded straight away.
    let initial_files: Vec<PathBuf> = std::env::args_os().skip(1).map(PathBuf::from).collect();

    run_overlay(OverlayConfig {
        initial_files,
        ..Default::default()
    })
}
