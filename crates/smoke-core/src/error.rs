//! Error type for smoke operations.

use std::path::PathBuf;

use thiserror::Error;

/// Result alias used across the smoke crates.
pub type Result<T> = std::result::Result<T, SmokeError>;

/// Errors raised while configuring or constructing an emitter.
#[derive(Debug, Error)]
pub enum SmokeError {
    /// No host surface was supplied and none could be discovered.
    #[error("no host surface available to draw on")]
    MissingParent,

    /// The ring must hold at least one sprite.
    #[error("sprite count must be positive, got {0}")]
    InvalidSpriteCount(usize),

    /// A colour did not have three or four channels.
    #[error("colour needs 3 or 4 channels, got {0}")]
    InvalidColor(usize),

    /// Config file could not be read or written.
    #[error("config file {path}: {source}")]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for [`crate::SmokeConfig`].
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// Config could not be serialized.
    #[error("config serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}
