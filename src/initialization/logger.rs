//! Logger initialization.
//!
//! Log lines go to stderr; stdout is reserved for the CLI's JSON results.

use std::io::{self, Write};

use colored::*;
use env_logger::fmt::Formatter;
use log::{Level, LevelFilter, Record};
use serde_json::json;

use crate::config::LogFormat;
use crate::error_handling::InitializationError;

/// HTTP stack crates, capped at `info`.
const NOISY_MODULES: &[&str] = &["reqwest", "hyper", "hyper_util", "h2"];

/// Initializes the global logger.
///
/// `RUST_LOG` is read first and `level` overrides it.
///
/// ```bash
/// RUST_LOG=seo_probe=debug seo_probe rank "fed rate decision" --domain example.com
/// seo_probe balance --log-level debug --log-format json
/// ```
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a global logger is already set.
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    let mut builder = env_logger::Builder::from_default_env();
    builder
        .target(env_logger::Target::Stderr)
        .filter_level(level)
        .filter_module(env!("CARGO_CRATE_NAME"), level);
    for module in NOISY_MODULES {
        builder.filter_module(module, level.min(LevelFilter::Info));
    }

    match format {
        LogFormat::Json => builder.format(write_json),
        LogFormat::Plain => builder.format(write_plain),
    };

    builder.try_init()?;
    Ok(())
}

fn write_json(buf: &mut Formatter, record: &Record) -> io::Result<()> {
    let line = json!({
        "ts": chrono::Utc::now().timestamp_millis(),
        "level": record.level().as_str(),
        "target": record.target(),
        "msg": record.args().to_string(),
    });
    writeln!(buf, "{line}")
}

fn write_plain(buf: &mut Formatter, record: &Record) -> io::Result<()> {
    writeln!(
        buf,
        "{} {} [{}] {}",
        chrono::Utc::now().format("%H:%M:%S%.3f"),
        record.target().cyan(),
        colored_level(record.level()),
        record.args()
    )
}

fn colored_level(level: Level) -> ColoredString {
    let label = level.as_str();
    match level {
        Level::Error => label.red(),
        Level::Warn => label.yellow(),
        Level::Info => label.green(),
        Level::Debug => label.blue(),
        Level::Trace => label.purple(),
    }
}
