#![cfg_attr(not(any(feature = "std", test)), no_std)]

//! memio Core - Typed Memory Definitions
//!
//! This crate provides the width descriptors, capability traits and
//! bounds-checked buffers for typed access to a growable byte region kept in
//! an external storage medium. It performs no I/O of its own: storage
//! collaborators implement [`Storage`] and are supplied by the caller.
//!
//! Layering, leaves first:
//!
//! - [`RawBuffer`]: tracks the region size and validates every byte range
//! - [`TypedView`]: little-endian fixed-width integers over any [`RawMemory`]
//! - [`FreeListAllocator`]: hands out byte ranges through [`MemoryManager`]

extern crate alloc;

pub mod allocator;
pub mod buffer;
pub mod error;
pub mod format;
pub mod traits;
pub mod validation;
pub mod view;

#[cfg(test)]
mod testing;

pub use allocator::FreeListAllocator;
pub use buffer::RawBuffer;
pub use error::*;
pub use format::*;
pub use traits::*;
pub use validation::{check_range, RangeError};
pub use view::TypedView;
