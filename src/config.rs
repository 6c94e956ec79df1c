//! Runtime settings
//!
//! Each setting is taken from its command-line flag, then from a
//! `WORDLE_<SECTION>__<FIELD>` environment variable, then from the default.

use crate::error::{Error, Result};
use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// All settings, grouped by concern
#[derive(Debug, Clone, Default, Args)]
pub struct Settings {
    #[command(flatten)]
    pub game: GameSettings,

    #[command(flatten)]
    pub logging: LoggingSettings,

    #[command(flatten)]
    pub paths: PathSettings,
}

impl Settings {
    /// Check value ranges clap cannot express
    ///
    /// # Errors
    /// Returns `Error::InvalidSettings` describing the first bad value.
    pub fn validate(&self) -> Result<()> {
        if self.game.max_turns == 0 {
            return Err(Error::InvalidSettings(
                "max turns must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}

/// Game rules
#[derive(Debug, Clone, Args)]
pub struct GameSettings {
    /// Maximum number of guesses allowed per game
    #[arg(long, global = true, env = "WORDLE_GAME__MAX_TURNS", default_value_t = 6)]
    pub max_turns: usize,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self { max_turns: 6 }
    }
}

/// Log verbosity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => Self::Error,
            LogLevel::Warn => Self::Warn,
            LogLevel::Info => Self::Info,
            LogLevel::Debug => Self::Debug,
            LogLevel::Trace => Self::Trace,
        }
    }
}

/// Log line layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    /// Timestamp, level, module and message
    #[default]
    Console,
    /// Level and message only
    Simple,
    /// One JSON object per line
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, Default, Args)]
pub struct LoggingSettings {
    /// Log level
    #[arg(
        long = "log-level",
        global = true,
        env = "WORDLE_LOGGING__LEVEL",
        value_enum,
        default_value_t
    )]
    pub level: LogLevel,

    /// Log format
    #[arg(
        long = "log-format",
        global = true,
        env = "WORDLE_LOGGING__FORMAT",
        value_enum,
        default_value_t
    )]
    pub format: LogFormat,
}

/// File locations
#[derive(Debug, Clone, Args)]
pub struct PathSettings {
    /// Directory containing the word lists
    #[arg(long, global = true, env = "WORDLE_PATH__DATA_FOLDER", default_value = "data")]
    pub data_folder: PathBuf,

    /// Allowed guesses (default: <data-folder>/word-bank.csv)
    #[arg(long, global = true, env = "WORDLE_PATH__WORD_BANK_CSV")]
    pub word_bank_csv: Option<PathBuf>,

    /// Allowed hidden answers (default: <data-folder>/valid-words.csv)
    #[arg(long, global = true, env = "WORDLE_PATH__VALID_WORDS_CSV")]
    pub valid_words_csv: Option<PathBuf>,

    /// Directory for cached feedback tables
    #[arg(long, global = true, env = "WORDLE_PATH__CACHE_FOLDER", default_value = ".cache")]
    pub cache_folder: PathBuf,

    /// Directory for exported benchmark results
    #[arg(
        long,
        global = true,
        env = "WORDLE_PATH__STATISTICS_FOLDER",
        default_value = "statistics"
    )]
    pub statistics_folder: PathBuf,
}

impl PathSettings {
    #[must_use]
    pub fn word_bank_path(&self) -> PathBuf {
        self.word_bank_csv
            .clone()
            .unwrap_or_else(|| self.data_folder.join("word-bank.csv"))
    }

    #[must_use]
    pub fn valid_words_path(&self) -> PathBuf {
        self.valid_words_csv
            .clone()
            .unwrap_or_else(|| self.data_folder.join("valid-words.csv"))
    }

    /// Where individual benchmark runs are written
    #[must_use]
    pub fn runs_folder(&self) -> PathBuf {
        self.statistics_folder.join("runs")
    }

    /// Where multi-strategy comparisons are written
    #[must_use]
    pub fn comparisons_folder(&self) -> PathBuf {
        self.statistics_folder.join("comparisons")
    }
}

impl Default for PathSettings {
    fn default() -> Self {
        Self {
            data_folder: PathBuf::from("data"),
            word_bank_csv: None,
            valid_words_csv: None,
            cache_folder: PathBuf::from(".cache"),
            statistics_folder: PathBuf::from("statistics"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct Harness {
        #[command(flatten)]
        settings: Settings,
    }

    #[derive(Parser)]
    struct WithCommand {
        #[command(subcommand)]
        command: Command,

        #[command(flatten)]
        settings: Settings,
    }

    #[derive(clap::Subcommand)]
    enum Command {
        Play,
    }

    #[test]
    fn defaults() {
        let settings = Settings::default();
        assert_eq!(settings.game.max_turns, 6);
        assert_eq!(settings.logging.level, LogLevel::Info);
        assert_eq!(settings.logging.format, LogFormat::Console);
        assert_eq!(
            settings.paths.word_bank_path(),
            PathBuf::from("data/word-bank.csv")
        );
        assert_eq!(
            settings.paths.valid_words_path(),
            PathBuf::from("data/valid-words.csv")
        );
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn flags_override_defaults() {
        let harness = Harness::parse_from([
            "test",
            "--max-turns",
            "4",
            "--log-level",
            "debug",
            "--log-format",
            "json",
            "--data-folder",
            "lists",
            "--valid-words-csv",
            "answers.txt",
        ]);
        let settings = harness.settings;

        assert_eq!(settings.game.max_turns, 4);
        assert_eq!(settings.logging.level, LogLevel::Debug);
        assert_eq!(settings.logging.format, LogFormat::Json);
        assert_eq!(
            settings.paths.word_bank_path(),
            PathBuf::from("lists/word-bank.csv")
        );
        assert_eq!(
            settings.paths.valid_words_path(),
            PathBuf::from("answers.txt")
        );
    }

    #[test]
    fn zero_turns_rejected() {
        let mut settings = Settings::default();
        settings.game.max_turns = 0;
        assert!(matches!(
            settings.validate(),
            Err(Error::InvalidSettings(_))
        ));
    }

    #[test]
    fn level_maps_to_filter() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
    }

    #[test]
    fn shared_flags_are_accepted_after_the_subcommand() {
        let cli = WithCommand::parse_from([
            "test",
            "play",
            "--max-turns",
            "4",
            "--word-bank-csv",
            "bank.csv",
            "--log-format",
            "simple",
        ]);

        assert!(matches!(cli.command, Command::Play));
        assert_eq!(cli.settings.game.max_turns, 4);
        assert_eq!(cli.settings.logging.format, LogFormat::Simple);
        assert_eq!(cli.settings.paths.word_bank_path(), PathBuf::from("bank.csv"));
    }

    #[test]
    fn comparisons_live_beside_runs() {
        let paths = PathSettings::default();
        assert_eq!(paths.runs_folder(), PathBuf::from("statistics/runs"));
        assert_eq!(
            paths.comparisons_folder(),
            PathBuf::from("statistics/comparisons")
        );
    }
}
