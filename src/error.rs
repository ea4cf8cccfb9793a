//! Error types shared by the generator, sorters, runner and file I/O.

use std::{fmt, io, path::PathBuf};

/// Result type for benchmarking operations.
pub type Result<T> = std::result::Result<T, BenchError>;

/// Errors that abort a single trial or command.
#[derive(Debug)]
pub enum BenchError {
    /// The request has the wrong shape (missing or conflicting arguments).
    InvalidArgument(String),

    /// No sorter is registered under this name.
    UnknownAlgorithm(String),

    /// The distribution flag is not one of the known spellings.
    UnknownDistribution(String),

    /// An input or output file could not be opened.
    FileOpen { path: PathBuf, source: io::Error },

    /// An input file does not follow the `n v1 v2 ... vn` layout.
    MalformedInput(String),

    /// Any other I/O failure while persisting results.
    Io(io::Error),
}

impl fmt::Display for BenchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            Self::UnknownAlgorithm(name) => write!(f, "No such algorithm: `{}`", name),
            Self::UnknownDistribution(name) => write!(f, "Unknown data order: `{}`", name),
            Self::FileOpen { path, source } => {
                write!(f, "Could not open {}: {}", path.display(), source)
            }
            Self::MalformedInput(msg) => write!(f, "Malformed input file: {}", msg),
            Self::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for BenchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileOpen { source, .. } => Some(source),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for BenchError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
