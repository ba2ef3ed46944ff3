//! Logger setup for the command-line front end.

use std::io::Write;
use std::str::FromStr;

use env_logger::{fmt::Formatter, Builder, Target};
use log::{Level, LevelFilter};

use crate::error::{Error, Result};

/// Parses a level name (`off`, `error`, `warn`, `info`, `debug`, `trace`).
pub fn parse_level(name: &str) -> Result<LevelFilter> {
    LevelFilter::from_str(name.trim())
        .map_err(|_| Error::invalid_config(format!("unknown log level '{name}'")))
}

/// Installs a compact stderr logger at `level`.
pub fn init_logger(level: LevelFilter) -> Result<()> {
    let mut builder = Builder::new();
    builder
        .filter_level(level)
        .write_style(env_logger::WriteStyle::Never)
        .target(Target::Stderr)
        .format(|buf: &mut Formatter, record| {
            writeln!(
                buf,
                "{} {} [{}] {}",
                buf.timestamp_millis(),
                level_tag(record.level()),
                record.target(),
                record.args()
            )
        });

    builder
        .try_init()
        .map_err(|e| Error::invalid_config(format!("logger init failed: {e}")))
}

fn level_tag(level: Level) -> &'static str {
    match level {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug").expect("ok"), LevelFilter::Debug);
        assert_eq!(parse_level("OFF").expect("ok"), LevelFilter::Off);
        assert!(parse_level("loud").is_err());
    }

    #[test]
    fn test_level_tag() {
        assert_eq!(level_tag(Level::Warn), "WARN");
        assert_eq!(level_tag(Level::Trace), "TRACE");
    }
}
