//! Error types for code-page operations.

use std::fmt;

/// Result type for code-page operations.
pub type PageResult<T> = Result<T, PageError>;

/// Errors that can occur when placing characters into a code page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageError {
    /// A placement range would extend past the end of the page.
    CapacityExceeded {
        /// Requested starting slot.
        offset: usize,
        /// Number of characters to place.
        len: usize,
        /// Total slots in the page.
        capacity: usize,
    },

    /// Auto-packing was asked for more slots than the page has left.
    PageFull {
        /// Number of characters to place.
        requested: usize,
        /// Slots already occupied.
        used: usize,
        /// Total slots in the page.
        capacity: usize,
    },

    /// An explicit-offset placement targeted an occupied slot.
    SlotCollision {
        /// Requested starting slot of the placement.
        offset: usize,
        /// The occupied slot that caused the failure.
        index: usize,
    },
}

impl fmt::Display for PageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityExceeded {
                offset,
                len,
                capacity,
            } => {
                write!(
                    f,
                    "cannot place {len} characters at offset {offset}: page capacity is {capacity}"
                )
            }
            Self::PageFull {
                requested,
                used,
                capacity,
            } => {
                write!(
                    f,
                    "cannot pack {requested} characters: {used} of {capacity} slots already used"
                )
            }
            Self::SlotCollision { offset, index } => {
                write!(
                    f,
                    "placement at offset {offset} collides with occupied slot {index}"
                )
            }
        }
    }
}

impl std::error::Error for PageError {}
