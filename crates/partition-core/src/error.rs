//! Error types for arena operations.
//!
//! Every fallible operation returns [`ArenaError`] and leaves the arena
//! exactly as it was before the call.

use std::error::Error;
use std::fmt;

/// Errors that can occur during arena operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArenaError {
    /// The arena was configured with a total size of zero.
    InvalidSize {
        /// The rejected total size.
        total_size: u32,
    },
    /// An allocation request was malformed.
    InvalidRequest {
        /// What was wrong with the request.
        reason: RequestDefect,
    },
    /// A placement strategy tag was not recognised.
    InvalidStrategy {
        /// The tag as supplied by the caller.
        tag: String,
    },
    /// No free block is large enough for the request.
    OutOfMemory {
        /// Requested size in address units.
        requested: u32,
        /// Size of the largest free block at the time of the request
        /// (0 if the arena has no holes).
        largest_hole: u32,
    },
    /// No allocated block has the given owner name.
    NotFound {
        /// The name that was looked up.
        name: String,
    },
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { total_size } => {
                write!(f, "invalid arena size: {total_size}")
            }
            Self::InvalidRequest { reason } => write!(f, "invalid request: {reason}"),
            Self::InvalidStrategy { tag } => write!(f, "unrecognised placement strategy '{tag}'"),
            Self::OutOfMemory {
                requested,
                largest_hole,
            } => {
                write!(
                    f,
                    "out of memory: requested {requested}, largest hole {largest_hole}"
                )
            }
            Self::NotFound { name } => write!(f, "no block allocated to '{name}'"),
        }
    }
}

impl Error for ArenaError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidRequest { reason } => Some(reason),
            _ => None,
        }
    }
}

impl From<RequestDefect> for ArenaError {
    fn from(reason: RequestDefect) -> Self {
        Self::InvalidRequest { reason }
    }
}

/// Why an allocation request was rejected before any placement search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RequestDefect {
    /// Zero-length allocations would create an empty block.
    ZeroSize,
    /// Owner names must be non-empty.
    EmptyName,
    /// The name already owns a live block.
    DuplicateName {
        /// The conflicting name.
        name: String,
    },
}

impl fmt::Display for RequestDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroSize => write!(f, "allocation size must be positive"),
            Self::EmptyName => write!(f, "owner name must not be empty"),
            Self::DuplicateName { name } => write!(f, "'{name}' is already allocated"),
        }
    }
}

impl Error for RequestDefect {}
