//! File logging for the terminal binary.
//!
//! The terminal belongs to the renderer, so log records go to a file through
//! `log4rs`. Configured from the environment:
//!
//! - `BLOCKFALL_LOG`: level filter (`off`, `error`, `warn`, `info`, `debug`, `trace`). Default `off`.
//! - `BLOCKFALL_LOG_FILE`: log file path. Default `blockfall.log`.

use std::str::FromStr;

use anyhow::{anyhow, Context, Result};
use log::LevelFilter;
use log4rs::{
    append::file::FileAppender,
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
};

pub const LOG_LEVEL_ENV: &str = "BLOCKFALL_LOG";
pub const LOG_FILE_ENV: &str = "BLOCKFALL_LOG_FILE";
pub const DEFAULT_LOG_FILE: &str = "blockfall.log";

/// Resolved logging settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    pub level: LevelFilter,
    pub file: String,
}

impl LogSettings {
    /// Read settings from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_values(
            std::env::var(LOG_LEVEL_ENV).ok().as_deref(),
            std::env::var(LOG_FILE_ENV).ok().as_deref(),
        )
    }

    /// Resolve settings from raw (possibly missing) values
    pub fn from_values(level: Option<&str>, file: Option<&str>) -> Result<Self> {
        let level = match level.map(str::trim).filter(|s| !s.is_empty()) {
            Some(raw) => LevelFilter::from_str(raw)
                .map_err(|_| anyhow!("invalid {} value {:?}", LOG_LEVEL_ENV, raw))?,
            None => LevelFilter::Off,
        };
        let file = file
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_LOG_FILE)
            .to_string();
        Ok(Self { level, file })
    }
}

/// Install the file logger. Does nothing when the level is `off`.
pub fn init(settings: &LogSettings) -> Result<()> {
    if settings.level == LevelFilter::Off {
        return Ok(());
    }

    let logfile = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S%.3f)} {l} {t} {m}{n}",
        )))
        .build(&settings.file)
        .with_context(|| format!("open log file {}", settings.file))?;

    let config = Config::builder()
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(settings.level)))
                .build("logfile", Box::new(logfile)),
        )
        .build(Root::builder().appender("logfile").build(settings.level))
        .context("build log config")?;

    log4rs::init_config(config).context("install logger")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_off() {
        let s = LogSettings::from_values(None, None).unwrap();
        assert_eq!(s.level, LevelFilter::Off);
        assert_eq!(s.file, DEFAULT_LOG_FILE);
    }

    #[test]
    fn parses_level_case_insensitively() {
        let s = LogSettings::from_values(Some("Debug"), Some("/tmp/x.log")).unwrap();
        assert_eq!(s.level, LevelFilter::Debug);
        assert_eq!(s.file, "/tmp/x.log");
    }

    #[test]
    fn rejects_unknown_level() {
        let err = LogSettings::from_values(Some("loud"), None).unwrap_err();
        assert!(err.to_string().contains(LOG_LEVEL_ENV));
    }

    #[test]
    fn off_does_not_install_a_logger() {
        let s = LogSettings::from_values(Some("off"), None).unwrap();
        assert!(init(&s).is_ok());
    }
}
