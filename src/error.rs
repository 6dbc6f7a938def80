//! Error types for style loading

use std::path::PathBuf;

use thiserror::Error;

/// A color literal that is not `#RRGGBB` / `#AARRGGBB`
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("color `{0}` must start with '#'")]
    MissingHash(String),

    #[error("color `{0}` has {1} hex digits, expected 6 or 8")]
    InvalidLength(String, usize),

    #[error("color `{0}` contains non-hex digits")]
    InvalidDigits(String),
}

/// Style configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Style file could not be read
    #[error("failed to read style file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Style file is not valid TOML for a style
    #[error("invalid style file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error(transparent)]
    Color(#[from] ColorParseError),

    #[error("at most 4 colors can be configured, got {0}")]
    TooManyColors(usize),

    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f32 },

    #[error("unknown render mode `{0}` (expected rotate, sequential or split)")]
    UnknownMode(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
