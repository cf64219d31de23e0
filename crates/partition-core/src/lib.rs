//! Core types for the Partition allocator simulator.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by the rest of the workspace: block identifiers,
//! placement strategies, and the error types every arena operation returns.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;
pub mod strategy;

pub use error::{ArenaError, RequestDefect};
pub use id::BlockId;
pub use strategy::Strategy;
