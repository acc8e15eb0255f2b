//! Error types for indented writing.
//!
//! A single error type flows through sinks and decorators alike, so a
//! decorator stacked on another decorator propagates failures untouched.

use std::{fmt, io};

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T, E = WriteError> = std::result::Result<T, E>;

/// Coarse classification of a [`WriteError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The caller broke an argument contract. Nothing was written.
    InvalidArgument,
    /// The target has already been closed.
    InvalidState,
    /// The failure came from the underlying sink.
    Propagated,
}

/// Errors raised while writing indented text.
#[derive(Debug, Error)]
pub enum WriteError {
    /// The configured line terminator is neither `"\n"` nor `"\r\n"`.
    #[error("unsupported line terminator {0:?}: expected \"\\n\" or \"\\r\\n\"")]
    UnsupportedLineTerminator(String),

    /// A character sub-range does not fit inside its buffer.
    #[error("range of {count} characters at index {index} is out of bounds for a buffer of length {len}")]
    RangeOutOfBounds {
        index: usize,
        count: usize,
        len: usize,
    },

    /// The prefix for this indent level does not fit in memory.
    #[error("indent level {level} with a {unit_len}-byte unit is too large to write")]
    IndentTooLarge { level: usize, unit_len: usize },

    /// The named component was used after it was closed.
    #[error("{0} has already been disposed")]
    Disposed(&'static str),

    /// I/O failure reported by a byte-oriented sink.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Formatting failure reported by a `fmt::Write` sink or a `Display` impl.
    #[error(transparent)]
    Fmt(#[from] fmt::Error),
}

impl WriteError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            WriteError::UnsupportedLineTerminator(_)
            | WriteError::RangeOutOfBounds { .. }
            | WriteError::IndentTooLarge { .. } => ErrorKind::InvalidArgument,
            WriteError::Disposed(_) => ErrorKind::InvalidState,
            WriteError::Io(_) | WriteError::Fmt(_) => ErrorKind::Propagated,
        }
    }

    /// Whether this error reports use of a closed component.
    #[inline]
    pub fn is_disposed(&self) -> bool {
        matches!(self, WriteError::Disposed(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds() {
        assert_eq!(
            WriteError::UnsupportedLineTerminator("\r".into()).kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(
            WriteError::RangeOutOfBounds {
                index: 3,
                count: 4,
                len: 5
            }
            .kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(
            WriteError::Disposed("IndentedWriter").kind(),
            ErrorKind::InvalidState
        );
        assert_eq!(WriteError::from(fmt::Error).kind(), ErrorKind::Propagated);
    }

    #[test]
    fn io_errors_pass_through_unchanged() {
        let err = WriteError::from(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"));
        assert_eq!(err.to_string(), "pipe closed");
        match err {
            WriteError::Io(inner) => assert_eq!(inner.kind(), io::ErrorKind::BrokenPipe),
            other => panic!("expected Io, got {other:?}"),
        }
    }

    #[test]
    fn messages() {
        assert_eq!(
            WriteError::Disposed("StringSink").to_string(),
            "StringSink has already been disposed"
        );
        assert_eq!(
            WriteError::UnsupportedLineTerminator("\r".into()).to_string(),
            "unsupported line terminator \"\\r\": expected \"\\n\" or \"\\r\\n\""
        );
        assert!(WriteError::Disposed("x").is_disposed());
        assert!(!WriteError::from(fmt::Error).is_disposed());
    }
}
