//! Error types
//!
//! Only the edges of the program can fail: loading settings and writing
//! frames. Geometry and simulation are total.

use std::path::PathBuf;

/// All the failures a run can surface
#[derive(Debug, thiserror::Error)]
pub enum MetaballsError {
    /// Reading or writing a file failed
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// A settings file exists but is not valid JSON for `Settings`
    #[error("invalid settings file {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// Settings could not be turned into JSON
    #[error("cannot serialize settings: {0}")]
    Serialize(#[source] serde_json::Error),
    /// Settings parsed but describe an impossible run
    #[error("invalid settings: {0}")]
    InvalidSettings(String),
}

impl MetaballsError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, MetaballsError>;
