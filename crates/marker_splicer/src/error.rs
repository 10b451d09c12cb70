// crates/marker_splicer/src/error.rs

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Which boundary of a splice a marker stands for.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum MarkerRole {
    Early,
    Start,
    End,
}

impl fmt::Display for MarkerRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MarkerRole::Early => "early",
            MarkerRole::Start => "start",
            MarkerRole::End => "end",
        };
        f.write_str(name)
    }
}

/// Result type alias for splice operations.
pub type Result<T> = std::result::Result<T, SpliceError>;

/// Everything that can stop a splice.
#[derive(Error, Debug)]
pub enum SpliceError {
    #[error("{role} marker '{marker}' not found in document")]
    MarkerNotFound { role: MarkerRole, marker: String },

    #[error("end marker at offset {end} precedes start marker at offset {start}")]
    EndBeforeStart { start: usize, end: usize },

    #[error("early marker at offset {early} follows start marker at offset {start}")]
    EarlyAfterStart { early: usize, start: usize },

    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SpliceError {
    pub(crate) fn marker_not_found(role: MarkerRole, marker: &str) -> Self {
        Self::MarkerNotFound {
            role,
            marker: marker.to_string(),
        }
    }
}
