//! File logging for the picker.
//!
//! The terminal is in the alternate screen while the picker runs, so logs
//! cannot go to stdout. When `RUST_LOG` is set they go to `tonepicker.log` in
//! the system temp dir; otherwise nothing is installed.

use std::{fs::File, sync::Mutex};

use color_eyre::eyre::{Result as EyreResult, WrapErr};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub fn init() -> EyreResult<()> {
    let Ok(directives) = std::env::var("RUST_LOG") else {
        return Ok(());
    };

    let log_path = std::env::temp_dir().join("tonepicker.log");
    let file = File::create(&log_path)
        .wrap_err_with(|| format!("failed to create log file at {}", log_path.display()))?;

    let file_layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(file_layer)
        .with(EnvFilter::new(directives))
        .init();

    tracing::info!(log_file = ?log_path, "tonepicker logging initialized");
    Ok(())
}
