//! Error types for the stream adapters.

use std::fmt;
use std::io;

/// Result type for stream operations.
pub type StreamResult<T> = Result<T, StreamError>;

/// Errors that can occur while reading or writing an encoded stream.
///
/// Undecodable content is not an error at this layer; it surfaces as skipped
/// units the same way it does in the registry.
#[derive(Debug)]
pub enum StreamError {
    /// The underlying source or sink failed.
    Io(io::Error),

    /// The source ended in the middle of a 16-bit unit.
    TruncatedUnit,
}

impl fmt::Display for StreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "stream i/o error: {e}"),
            Self::TruncatedUnit => {
                write!(f, "stream ended in the middle of a 16-bit code unit")
            }
        }
    }
}

impl std::error::Error for StreamError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::TruncatedUnit => None,
        }
    }
}

impl From<io::Error> for StreamError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_io() {
        let err = StreamError::Io(io::Error::new(io::ErrorKind::BrokenPipe, "pipe"));
        let msg = err.to_string();
        assert!(msg.contains("i/o"), "should mention i/o");
        assert!(msg.contains("pipe"), "should carry the inner message");
    }

    #[test]
    fn error_display_truncated_unit() {
        let err = StreamError::TruncatedUnit;
        assert!(err.to_string().contains("16-bit"));
    }

    #[test]
    fn error_source_io() {
        let err = StreamError::Io(io::Error::new(io::ErrorKind::Other, "inner"));
        assert!(std::error::Error::source(&err).is_some());
        assert!(std::error::Error::source(&StreamError::TruncatedUnit).is_none());
    }

    #[test]
    fn error_is_std_error() {
        fn assert_error<E: std::error::Error>() {}
        assert_error::<StreamError>();
    }
}
