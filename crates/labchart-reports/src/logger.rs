// File: crates/labchart-reports/src/logger.rs
// Summary: log4rs console logging for the report binaries.

use anyhow::{Context, Result};
use log::LevelFilter;
use log4rs::{
    append::console::{ConsoleAppender, Target},
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
};

/// Environment variable holding the log level filter (`warn` when unset or invalid).
pub const LOG_ENV: &str = "LABCHART_LOG";

pub fn level_from_env() -> LevelFilter {
    std::env::var(LOG_ENV)
        .ok()
        .and_then(|v| v.trim().parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Warn)
}

/// Log to stderr so stdout carries only the per-file confirmations.
pub fn init_logger() -> Result<()> {
    let pattern = "{d(%Y-%m-%d %H:%M:%S)} | {h({l}):5.5} | {t} | {m}{n}";

    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(pattern)))
        .build();

    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level_from_env()))
        .context("invalid log4rs config")?;

    log4rs::init_config(config).context("logger already initialised")?;
    Ok(())
}
