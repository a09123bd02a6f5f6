use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal translation failures, one variant per setup or I/O phase.
///
/// Per-line anomalies (malformed config lines, short rows, unknown
/// keys) are never errors; they are absorbed as [`DiscardReason`]
/// outcomes and counted in the run summary.
///
/// [`DiscardReason`]: crate::DiscardReason
#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("config {path} contains no usable entries")]
    ConfigEmpty { path: PathBuf },
    #[error("open input {path}: {source}")]
    InputOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("read input {path}: {source}")]
    InputRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("create output {path}: {source}")]
    OutputCreate {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("write output {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, TranslateError>;
