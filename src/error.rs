//! Error types for loading the emoji dataset.

use std::path::PathBuf;
use thiserror::Error;

/// Failures that end a session in the error state.
///
/// None of these are retried; the display string is shown to the user as-is.
#[derive(Debug, Error)]
pub enum PickerError {
    /// The dataset could not be downloaded (transport failure or non-2xx status).
    #[error("failed to download emojis from {url}: {reason}")]
    Fetch { url: String, reason: String },

    /// The cached or downloaded bytes are not a keyword mapping.
    #[error("failed to parse emoji cache: {0}")]
    Parse(#[from] serde_json::Error),

    /// Creating the cache directory or reading/writing a cache file failed.
    #[error("cache I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Fetch,
    Parse,
    Io,
}

pub type PickerResult<T> = Result<T, PickerError>;

impl PickerError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PickerError::Fetch { .. } => ErrorKind::Fetch,
            PickerError::Parse(_) => ErrorKind::Parse,
            PickerError::Io { .. } => ErrorKind::Io,
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PickerError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn fetch(url: &str, reason: impl Into<String>) -> Self {
        PickerError::Fetch {
            url: url.to_string(),
            reason: reason.into(),
        }
    }
}
