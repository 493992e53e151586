use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for initgen operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Fatal errors. Index write failures are not errors, see [`crate::Warning`].
#[derive(Error, Debug)]
pub enum Error {
    /// Directory could not be listed.
    #[error("failed to read directory {}: {source}", .path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// Config file could not be read.
    #[error("failed to read config {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for [`crate::GeneratorConfig`].
    #[error("invalid config {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Config values failed validation.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
