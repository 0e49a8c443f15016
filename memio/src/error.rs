//! Error types for std-backed memory regions
//!
//! Every storage collaborator in this crate fails with [`std::io::Error`], so
//! regions built on them share a single error type.

use std::io;

pub use memio_core::{ErrorKind, MemoryError};

/// Error for memory regions backed by this crate's storages
pub type Error = MemoryError<io::Error>;

/// Result type for memory regions backed by this crate's storages
pub type Result<T> = std::result::Result<T, Error>;
