use std::path::PathBuf;

use thiserror::Error;

/// The primary error type for all operations in the `deflation` crate.
///
/// Library code never terminates the process; every failure is returned as
/// one of these variants and carries the path it happened on, so the caller
/// can format a diagnostic and decide whether to abort.
#[derive(Debug, Error)]
pub enum DeflateError {
    /// An I/O error occurred, typically while reading an asset or writing
    /// the pack file. Includes the path where the error happened.
    #[error("I/O error on path '{path}': {source}")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    /// The input folder could not be opened, or crawling it yielded nothing
    /// packable. No output file is created in this case.
    #[error("input directory '{root}' could not be opened or contains nothing to pack")]
    EmptyInput { root: PathBuf },

    /// Reading an asset returned a different number of bytes than its
    /// metadata reported. Treated as unrecoverable for the whole pack.
    #[error("short read on '{path}': expected {expected} bytes, got {got}")]
    ShortRead {
        path: PathBuf,
        expected: u64,
        got: u64,
    },

    /// An entry path does not fit the fixed-width path field of the pack
    /// format. Reported explicitly instead of being truncated.
    #[error("path '{path}' is {len} bytes, longer than the pack format allows")]
    PathTooLong { path: PathBuf, len: usize },

    /// An entry path is not valid UTF-8 and cannot be stored in a pack.
    #[error("path '{path}' is not valid UTF-8")]
    NonUtf8Path { path: PathBuf },
}

impl DeflateError {
    /// Attaches a path to a raw `std::io::Error`.
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DeflateError::Io {
            source,
            path: path.into(),
        }
    }
}
