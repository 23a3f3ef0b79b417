//! Asset compiler errors.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that stop asset compilation.
///
/// A missing or empty source directory is not an error; see
/// [`CompileOutcome::Stale`](super::CompileOutcome::Stale).
#[derive(Debug, Error)]
pub enum CompileError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("IO error when writing `{0}`")]
    Write(PathBuf, #[source] std::io::Error),

    #[error("failed to compress `{0}`")]
    Compress(PathBuf, #[source] std::io::Error),

    #[error("file name `{0}` is not valid UTF-8")]
    NonUtf8Name(PathBuf),

    #[error("`{file}`: `.{marker}` must appear once, as its own segment between two dots")]
    InvalidMarker { file: String, marker: String },

    #[error("`{file}`: derived symbol `{symbol}` is not a valid identifier")]
    InvalidSymbol { file: String, symbol: String },

    #[error("`{first}` and `{second}` both compile to symbol `{symbol}`")]
    DuplicateSymbol {
        symbol: String,
        first: String,
        second: String,
    },

    #[error("`{first}` and `{second}` are both served at `{url}`")]
    DuplicateUrl {
        url: String,
        first: String,
        second: String,
    },
}
