use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the podium workspace.
///
/// The replay algorithm itself is total and never returns this; errors arise
/// only at the ingestion, configuration, and rendering boundaries.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PodiumError {
    /// Filesystem access failed while reading input or writing a page.
    #[error("io error: {0}")]
    Io(String),

    /// The CSV reader rejected the input file.
    #[error("csv error: {0}")]
    Csv(String),

    /// The site configuration is missing, malformed, or inconsistent.
    #[error("config error: {0}")]
    Config(String),
}

impl PodiumError {
    /// Helper: build an `Io` error from a message.
    pub fn io(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    /// Helper: build a `Csv` error from a message.
    pub fn csv(msg: impl Into<String>) -> Self {
        Self::Csv(msg.into())
    }

    /// Helper: build a `Config` error from a message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

impl From<std::io::Error> for PodiumError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
