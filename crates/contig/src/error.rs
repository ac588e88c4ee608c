//! Container error types.

use std::error::Error;
use std::fmt;

/// Errors reported by the checked operations of [`Vector`](crate::Vector).
///
/// Only operations whose signature returns `Result` produce these; the
/// infallible-by-signature operations (`reserve`, `push_back`, ...) panic on
/// capacity overflow instead, like `std::vec::Vec`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VectorError {
    /// Checked access past the last live element.
    OutOfRange {
        /// The index that was requested.
        index: usize,
        /// Number of live elements at the time of the request.
        size: usize,
    },
    /// The requested slot count does not fit in the address space.
    CapacityOverflow {
        /// Number of slots requested.
        requested: usize,
    },
    /// The global allocator could not satisfy the request.
    AllocFailed {
        /// Number of slots requested.
        requested: usize,
    },
}

impl fmt::Display for VectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { index, size } => {
                write!(f, "index out of range: index {index}, size {size}")
            }
            Self::CapacityOverflow { requested } => {
                write!(f, "capacity overflow: requested {requested} slots")
            }
            Self::AllocFailed { requested } => {
                write!(f, "allocation failed: requested {requested} slots")
            }
        }
    }
}

impl Error for VectorError {}
