use std::path::PathBuf;

use thiserror::Error;

use crate::validation::ConfigGuardRailError;

/// Reasons a configuration cannot be loaded.
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    /// The config file could not be read.
    #[error("failed to read config file {path}")]
    ConfigFileIo {
        /// Config file path.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
    /// The config file is not valid TOML for this schema.
    #[error("failed to parse config file {path}")]
    ConfigFileParse {
        /// Config file path.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: toml::de::Error,
    },
    /// The listings source looks like a URL but does not parse.
    #[error("invalid listings source URL '{raw}'")]
    InvalidSourceUrl {
        /// Value as configured.
        raw: String,
        /// Underlying error.
        #[source]
        source: url::ParseError,
    },
    /// A value was rejected by the guard rails.
    #[error(transparent)]
    GuardRail(#[from] ConfigGuardRailError),
    /// The `.env` file exists but could not be loaded.
    #[error(transparent)]
    EnvFile(#[from] dotenvy::Error),
}
