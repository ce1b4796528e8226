use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config parse error: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Errors surfaced by the command-line front end.
///
/// The matching core never fails; these only cover user input and setup.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid color: {0:?} (expected #RRGGBB or RRGGBB)")]
    InvalidColor(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}
