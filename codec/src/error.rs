//! Error types for registry operations.

use std::fmt;
use std::io;

use page::PageError;

/// Result type for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Errors that can occur while registering or extending code pages.
///
/// Encode and decode themselves never fail; unmappable input surfaces as
/// diagnostics on [`Encoded`](crate::Encoded) and [`Decoded`](crate::Decoded)
/// instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// An operation referenced a page id that was never registered.
    UnknownPage {
        /// The requested page id.
        page: usize,
        /// Number of registered pages.
        registered: usize,
    },

    /// A page-level placement failure, tagged with the page it occurred in.
    Page {
        /// The page the operation targeted.
        page: usize,
        /// The underlying placement error.
        source: PageError,
    },
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownPage { page, registered } => {
                write!(
                    f,
                    "page {page} does not exist: {registered} pages registered"
                )
            }
            Self::Page { page, source } => {
                write!(f, "page {page}: {source}")
            }
        }
    }
}

impl std::error::Error for RegistryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Page { source, .. } => Some(source),
            Self::UnknownPage { .. } => None,
        }
    }
}

/// Errors that can occur while loading a mapping file.
#[derive(Debug)]
pub enum MapfileError {
    /// The file could not be read.
    Io(io::Error),

    /// A line of the file failed to register as a page.
    Registry(RegistryError),
}

impl fmt::Display for MapfileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "mapping file i/o error: {e}"),
            Self::Registry(e) => write!(f, "mapping file rejected: {e}"),
        }
    }
}

impl std::error::Error for MapfileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Registry(e) => Some(e),
        }
    }
}

impl From<io::Error> for MapfileError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<RegistryError> for MapfileError {
    fn from(err: RegistryError) -> Self {
        Self::Registry(err)
    }
}
