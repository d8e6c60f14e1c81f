use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading result files and querying datasets.
///
/// Load-side failures (`Io`, `MalformedInput`, `ResultFormat`,
/// `EmptyDataset`) abort dataset construction and surface to the caller.
/// `LookupMismatch` is the one kind expected during normal interactive
/// use (stale chart clicks) and is degraded by the resolver rather than
/// propagated.
#[derive(Debug, Error)]
pub enum VizError {
    /// Filesystem access failure while scanning or reading input.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Unparseable input file, or parseable JSON with an unexpected shape.
    #[error("malformed input file {path}: {reason}")]
    MalformedInput { path: PathBuf, reason: String },

    /// A result value that is neither null nor a number.
    #[error("non-numeric result for subject '{subject}' step '{step}': {value}")]
    ResultFormat {
        subject: String,
        step: String,
        value: String,
    },

    /// A scan that produced no usable input files or subdirectories.
    #[error("no result files found under {path}")]
    EmptyDataset { path: PathBuf },

    /// A click coordinate that no longer matches any dataset row.
    #[error("no record matches pipeline '{pipeline}' with result {result}")]
    LookupMismatch { pipeline: String, result: f64 },
}

impl VizError {
    pub(crate) fn malformed(path: &std::path::Path, reason: impl Into<String>) -> Self {
        VizError::MalformedInput {
            path: path.to_path_buf(),
            reason: reason.into(),
        }
    }

    pub(crate) fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        VizError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
