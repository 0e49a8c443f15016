//! memio - Typed Memory over Files
//!
//! This library provides storage collaborators for the bounds-checked buffers
//! and typed integer views defined in `memio-core`.
//!
//! ## Architecture
//!
//! memio keeps the layout rules apart from the I/O:
//!
//! - **memio-core**: width descriptors, capability traits, buffers and views (no I/O)
//! - **memio**: file, memory-mapped and in-memory storages, configuration, logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use memio::{RawMemory, StorageConfig, TypedMemory};
//!
//! fn example() -> memio::Result<()> {
//!     let mut view = memio::open_file("region.bin", &StorageConfig::default())?;
//!
//!     let offset = view.size();
//!     view.increase_size(4)?;
//!     view.write_uint32(offset, 0xDEAD_BEEF)?;
//!     assert_eq!(view.read_uint32(offset)?, 0xDEAD_BEEF);
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **mmap**: [`MmapStorage`] backed by `memmap2`
//! - **serde**: JSON configuration and serializable [`IntWidth`]
//! - **cli**: the `memio` command-line tool

use std::path::Path;

// Re-export core abstractions
pub use memio_core::{
    // Buffers and views
    FreeListAllocator, RawBuffer, TypedView,
    // Capability traits
    MemoryManager, RawMemory, Storage, TypedMemory,
    // Layout definitions
    IntWidth, WidthDescriptor,
};

pub mod config;
pub mod error;
pub mod storage;

pub use config::StorageConfig;
pub use error::{Error, ErrorKind, MemoryError, Result};
pub use storage::{FileStorage, VecStorage};
#[cfg(feature = "mmap")]
pub use storage::MmapStorage;

/// Typed view over a plain file
pub type FileView = TypedView<RawBuffer<FileStorage>>;

/// Typed view over a memory-mapped file
#[cfg(feature = "mmap")]
pub type MmapView = TypedView<RawBuffer<MmapStorage>>;

/// Typed view over an in-memory vector
pub type VecView = TypedView<RawBuffer<VecStorage>>;

/// Open a typed view over the file at `path`
pub fn open_file<P: AsRef<Path>>(path: P, config: &StorageConfig) -> Result<FileView> {
    let storage = FileStorage::open(path, config).map_err(MemoryError::Storage)?;
    TypedView::from_storage(storage)
}

/// Open a typed view over the memory-mapped file at `path`
#[cfg(feature = "mmap")]
pub fn open_mmap<P: AsRef<Path>>(path: P, config: &StorageConfig) -> Result<MmapView> {
    let storage = MmapStorage::open(path, config).map_err(MemoryError::Storage)?;
    TypedView::from_storage(storage)
}
