//! Capability contracts for typed memory
//!
//! Each trait is a separate capability rather than a level in a hierarchy:
//! storage collaborators implement [`Storage`], bounds-checked buffers
//! implement [`RawMemory`], typed views add [`TypedMemory`], and allocators
//! implement [`MemoryManager`].

pub mod manager;
pub mod raw;
pub mod storage;
pub mod typed;

pub use manager::MemoryManager;
pub use raw::RawMemory;
pub use storage::Storage;
pub use typed::TypedMemory;
