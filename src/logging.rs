//! Logger initialisation
//!
//! The library only emits through the `log` facade. The binary installs an
//! `env_logger` backend here; `RUST_LOG` still refines per-module filters on
//! top of the configured level.

use crate::config::{LogFormat, LoggingSettings};
use env_logger::Builder;
use std::io::Write;

/// Build a logger for the given settings without installing it
#[must_use]
pub fn builder(settings: &LoggingSettings) -> Builder {
    let mut builder = Builder::new();
    builder.filter_level(settings.level.into()).parse_default_env();

    match settings.format {
        LogFormat::Console => {
            builder.format_timestamp_millis().format_module_path(true);
        }
        LogFormat::Simple => {
            builder.format(|buf, record| writeln!(buf, "{:<5} {}", record.level(), record.args()));
        }
        LogFormat::Json => {
            builder.format(|buf, record| {
                let line = serde_json::json!({
                    "timestamp": chrono::Local::now().to_rfc3339(),
                    "level": record.level().as_str(),
                    "target": record.target(),
                    "message": record.args().to_string(),
                });
                writeln!(buf, "{line}")
            });
        }
    }

    builder
}

/// Install the global logger
///
/// Calling this more than once keeps the first logger.
pub fn init(settings: &LoggingSettings) {
    // Already installed, e.g. by a test harness
    let _ = builder(settings).try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LogLevel;

    #[test]
    fn init_twice_is_harmless() {
        let settings = LoggingSettings {
            level: LogLevel::Warn,
            format: LogFormat::Json,
        };
        init(&settings);
        init(&settings);
        log::warn!("logger installed");
    }

    #[test]
    fn every_format_builds() {
        for format in [LogFormat::Console, LogFormat::Simple, LogFormat::Json] {
            let settings = LoggingSettings {
                level: LogLevel::Debug,
                format,
            };
            let logger = builder(&settings).build();
            assert_eq!(logger.filter(), log::LevelFilter::Debug);
        }
    }
}
