//! Allocator contract

use crate::Result;

/// Hands out and reclaims byte ranges inside a memory region
///
/// Pointers are byte offsets into the region.
pub trait MemoryManager {
    /// Error type of the underlying storage collaborator
    type Error;

    /// Reserve `size` bytes and return their offset
    fn allocate(&mut self, size: u64) -> Result<u64, Self::Error>;

    /// Release the block previously returned by [`MemoryManager::allocate`]
    fn free(&mut self, ptr: u64) -> Result<(), Self::Error>;
}
