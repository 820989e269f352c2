use std::path::PathBuf;

use strum::Display;
use thiserror::Error;

/// Which collection an out-of-range index was aimed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum IndexTarget {
    #[strum(serialize = "macro")]
    Macro,
    #[strum(serialize = "action")]
    Action,
}

/// Which duration field failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum DurationField {
    #[strum(serialize = "hold_ms")]
    Hold,
    #[strum(serialize = "delay_ms")]
    Delay,
}

/// Failure of a single configuration edit. The caller's snapshot is untouched
/// whenever one of these is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    #[error("{target} index {index} is out of range (length {len})")]
    IndexOutOfRange {
        target: IndexTarget,
        index: usize,
        len: usize,
    },

    #[error("Unknown key: {0:?}")]
    InvalidKey(String),

    #[error("Invalid mode: {0}")]
    InvalidMode(i64),

    #[error("{field} must not be negative (got {value})")]
    InvalidDuration { field: DurationField, value: i64 },
}

/// Fieldless view of [`EditError`], for callers that only branch on the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ErrorKind {
    IndexOutOfRange,
    InvalidKey,
    InvalidMode,
    InvalidDuration,
}

impl EditError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::IndexOutOfRange { .. } => ErrorKind::IndexOutOfRange,
            Self::InvalidKey(_) => ErrorKind::InvalidKey,
            Self::InvalidMode(_) => ErrorKind::InvalidMode,
            Self::InvalidDuration { .. } => ErrorKind::InvalidDuration,
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("TOML write error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error(transparent)]
    Edit(#[from] EditError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unsupported config format: {}", .0.display())]
    UnsupportedFormat(PathBuf),
}

pub type Result<T> = std::result::Result<T, AppError>;
