//! Server configuration read from environment variables (and a `.env` file, if present).

use std::{env::VarError, str::FromStr};

use thiserror::Error;

/// The address to listen on if `ADDRESS` isn't set.
const DEFAULT_ADDRESS: &str = "127.0.0.1:3000";

/// The log filter to use if `RUST_LOG` isn't set.
const DEFAULT_LOG_FILTER: &str = "info";

/// The server's configuration.
#[derive(Clone, PartialEq, Eq, Debug)]
pub(crate) struct Config {
    /// The socket address to listen on, from `ADDRESS`.
    pub(crate) address: String,

    /// The [`tracing_subscriber::EnvFilter`] directives, from `RUST_LOG`.
    pub(crate) log_filter: String,

    /// How log lines are formatted, from `LOG_FORMAT`.
    pub(crate) log_format: LogFormat,
}

impl Config {
    /// Reads the configuration from the environment, falling back to defaults for unset
    /// variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a `.env` file exists but can't be parsed, or if a variable is set to
    /// an invalid value.
    pub(crate) fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| dotenvy::var(key))
    }

    /// Reads the configuration using the specified variable lookup.
    fn from_vars<F>(var: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Result<String, dotenvy::Error>,
    {
        let optional = |key: &'static str| match var(key) {
            Ok(value) => Ok(Some(value)),
            Err(dotenvy::Error::EnvVar(VarError::NotPresent)) => Ok(None),
            Err(source) => Err(ConfigError::Read { key, source }),
        };

        let log_format = match optional("LOG_FORMAT")? {
            Some(value) => value.parse()?,
            None => LogFormat::default(),
        };

        Ok(Self {
            address: optional("ADDRESS")?.unwrap_or_else(|| DEFAULT_ADDRESS.to_owned()),
            log_filter: optional("RUST_LOG")?.unwrap_or_else(|| DEFAULT_LOG_FILTER.to_owned()),
            log_format,
        })
    }
}

/// How log lines are formatted.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub(crate) enum LogFormat {
    /// Multi-line, human-readable output.
    #[default]
    Pretty,

    /// One JSON object per line.
    Json,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(str: &str) -> Result<Self, Self::Err> {
        match str.to_ascii_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            _ => Err(ConfigError::LogFormat(str.to_owned())),
        }
    }
}

/// An error reading the [`Config`].
#[derive(Error, Debug)]
pub(crate) enum ConfigError {
    /// An environment variable couldn't be read.
    #[error("failed to read environment variable `{key}`: {source}")]
    Read {
        /// The variable's name.
        key: &'static str,

        /// Why it couldn't be read.
        source: dotenvy::Error,
    },

    /// `LOG_FORMAT` wasn't a known format.
    #[error("invalid `LOG_FORMAT` {0:?}, expected \"pretty\" or \"json\"")]
    LogFormat(String),
}
