use std::fs;

use color_eyre::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{Config, get_data_dir};

pub const LOG_FILE: &str = concat!(env!("CARGO_PKG_NAME"), ".log");

/// Route `tracing` output to `<data_dir>/applicant.log`.
///
/// The terminal belongs to the UI, so there is no console layer. `RUST_LOG`
/// wins over `logging.level` from the config.
pub fn init(config: &Config) -> Result<WorkerGuard> {
    let directory = get_data_dir();
    fs::create_dir_all(&directory)?;

    let file_appender = tracing_appender::rolling::never(&directory, LOG_FILE);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.level))?;

    let file_layer = fmt::layer()
        .with_file(true)
        .with_line_number(true)
        .with_target(false)
        .with_ansi(false)
        .with_writer(non_blocking)
        .with_filter(env_filter);

    tracing_subscriber::registry()
        .with(file_layer)
        .with(ErrorLayer::default())
        .try_init()?;

    Ok(guard)
}
