//! VFirst Runtime
//!
//! Opens a window, creates a Vulkan instance and idles until the window closes

mod app;
mod session;

use std::process::ExitCode;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;
use vfirst_core::Settings;
use vfirst_render::window::create_event_loop;

use crate::app::App;

fn main() -> ExitCode {
    // Initialize logging, RUST_LOG overrides the default level
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", diagnostic(&err));
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    tracing::info!("VFirst v{}", vfirst_core::VERSION);

    let settings = Settings::default();
    tracing::info!(
        width = settings.window.width,
        height = settings.window.height,
        validation = settings.instance.enable_validation,
        "starting"
    );

    let event_loop = create_event_loop().context("failed to create event loop")?;
    let mut app = App::new(settings);
    event_loop
        .run_app(&mut app)
        .context("event loop terminated abnormally")?;

    app.finish()
}

/// Whole error chain on one line
fn diagnostic(err: &anyhow::Error) -> String {
    format!("{err:#}")
}
