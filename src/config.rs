//! Command-line configuration.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use gfx::board::MAX_PLAYERS;

use crate::logging::LogKind;

pub const USAGE: &str = "\
usage: broadside [--players N] [--name NAME]... [--atlas PATH]
                 [--vsync-timeout-ms MS] [--log stdout|file]";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub players: usize,
    pub names: Vec<String>,
    pub atlas: Option<PathBuf>,
    pub vsync_timeout: Option<Duration>,
    pub log: LogKind,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            players: 2,
            names: Vec::new(),
            atlas: None,
            vsync_timeout: None,
            log: LogKind::Stdout,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    MissingValue(String),
    InvalidValue { flag: String, value: String },
    UnknownFlag(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingValue(flag) => write!(f, "{flag} needs a value"),
            Self::InvalidValue { flag, value } => write!(f, "invalid value for {flag}: {value}"),
            Self::UnknownFlag(flag) => write!(f, "unknown flag {flag}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    /// Parses flags, not including the program name.
    pub fn from_args(args: impl IntoIterator<Item = String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        let mut args = args.into_iter();

        while let Some(flag) = args.next() {
            let mut value = || args.next().ok_or_else(|| ConfigError::MissingValue(flag.clone()));
            match flag.as_str() {
                "--players" => {
                    let raw = value()?;
                    config.players = raw
                        .parse()
                        .ok()
                        .filter(|n| (1..=MAX_PLAYERS).contains(n))
                        .ok_or_else(|| invalid(&flag, raw))?;
                }
                "--name" => config.names.push(value()?),
                "--atlas" => config.atlas = Some(PathBuf::from(value()?)),
                "--vsync-timeout-ms" => {
                    let raw = value()?;
                    let ms = raw.parse().map_err(|_| invalid(&flag, raw))?;
                    config.vsync_timeout = Some(Duration::from_millis(ms));
                }
                "--log" => {
                    let raw = value()?;
                    let kind = match raw.as_str() {
                        "stdout" => Some(LogKind::Stdout),
                        "file" => Some(LogKind::File),
                        _ => None,
                    };
                    config.log = kind.ok_or_else(|| invalid(&flag, raw))?;
                }
                _ => return Err(ConfigError::UnknownFlag(flag)),
            }
        }

        Ok(config)
    }
}

fn invalid(flag: &str, value: String) -> ConfigError {
    ConfigError::InvalidValue {
        flag: flag.to_owned(),
        value,
    }
}
