//! Storage collaborators
//!
//! Concrete implementations of [`memio_core::Storage`]. All of them report
//! failures as [`std::io::Error`].

pub mod file;
pub mod memory;
#[cfg(feature = "mmap")]
pub mod mmap;

pub use file::FileStorage;
pub use memory::VecStorage;
#[cfg(feature = "mmap")]
pub use mmap::MmapStorage;
