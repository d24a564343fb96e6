//! Core error types

use std::io;
use thiserror::Error;

/// Errors raised while streaming a run through the transducer
///
/// Both variants abort the current run. Nothing is retried.
#[derive(Error, Debug)]
pub enum Error {
    /// Reading from the source failed
    #[error("read failed: {0}")]
    Read(#[source] io::Error),

    /// Writing to the sink (or the line-start hook) failed
    #[error("write failed: {0}")]
    Write(#[source] io::Error),
}

impl Error {
    /// Consume the error, returning the underlying I/O error
    pub fn into_io_error(self) -> io::Error {
        match self {
            Error::Read(err) | Error::Write(err) => err,
        }
    }
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_read_error_display() {
        let error = Error::Read(io::Error::new(io::ErrorKind::Other, "disk gone"));
        assert_eq!(error.to_string(), "read failed: disk gone");
    }

    #[test]
    fn test_write_error_display() {
        let error = Error::Write(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"));
        assert_eq!(error.to_string(), "write failed: pipe closed");
    }

    #[test]
    fn test_source_is_io_error() {
        let error = Error::Read(io::Error::new(io::ErrorKind::NotFound, "missing"));
        let source = error.source().unwrap();
        assert_eq!(source.to_string(), "missing");
        assert_eq!(error.into_io_error().kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_into_io_error_keeps_kind() {
        let error = Error::Write(io::Error::new(io::ErrorKind::WriteZero, "short write"));
        assert_eq!(error.into_io_error().kind(), io::ErrorKind::WriteZero);
    }
}
