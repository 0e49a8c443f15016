//! First-fit free-list allocator over a raw byte range
//!
//! The allocator manages the bytes from `base` (the region's size when the
//! allocator was created) up to the end of the region. Requests are served
//! from the lowest free block that fits; when none fits the region grows.
//! Freed blocks coalesce with their neighbours, and free space at the end of
//! the region is handed back with [`RawMemory::reduce_size`].

use alloc::vec::Vec;
use hashbrown::HashMap;

use crate::traits::{MemoryManager, RawMemory};
use crate::{MemoryError, Result};

/// Contiguous free byte range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Block {
    offset: u64,
    len: u64,
}

impl Block {
    const fn end(&self) -> u64 {
        self.offset + self.len
    }
}

/// Free-list allocator implementing [`MemoryManager`]
///
/// Freshly grown blocks are zero-filled; reused blocks keep whatever bytes
/// were last written to them.
#[derive(Debug)]
pub struct FreeListAllocator<R> {
    memory: R,
    base: u64,
    live: HashMap<u64, u64>,
    /// Sorted by offset, never adjacent
    free: Vec<Block>,
}

impl<R: RawMemory> FreeListAllocator<R> {
    /// Manage the space after the current end of `memory`
    pub fn new(memory: R) -> Self {
        let base = memory.size();
        Self {
            memory,
            base,
            live: HashMap::new(),
            free: Vec::new(),
        }
    }

    /// First offset managed by this allocator
    pub fn base(&self) -> u64 {
        self.base
    }

    /// Borrow the underlying memory
    pub fn get_ref(&self) -> &R {
        &self.memory
    }

    /// Release the underlying memory
    pub fn into_inner(self) -> R {
        self.memory
    }

    /// Number of live allocations
    pub fn len(&self) -> usize {
        self.live.len()
    }

    /// Returns true if nothing is allocated
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Size of the live allocation at `ptr`
    pub fn size_of(&self, ptr: u64) -> Option<u64> {
        self.live.get(&ptr).copied()
    }

    /// Total bytes held by live allocations
    pub fn allocated_bytes(&self) -> u64 {
        self.live.values().sum()
    }

    /// Total bytes in the free list
    pub fn free_bytes(&self) -> u64 {
        self.free.iter().map(|block| block.len).sum()
    }

    fn take_free(&mut self, size: u64) -> Option<u64> {
        let idx = self.free.iter().position(|block| block.len >= size)?;
        let block = self.free[idx];
        if block.len == size {
            self.free.remove(idx);
        } else {
            self.free[idx] = Block {
                offset: block.offset + size,
                len: block.len - size,
            };
        }
        Some(block.offset)
    }

    fn insert_free(&mut self, mut block: Block) {
        let idx = self.free.partition_point(|b| b.offset < block.offset);

        if let Some(next) = self.free.get(idx).copied() {
            if block.end() == next.offset {
                block.len += next.len;
                self.free.remove(idx);
            }
        }

        if let Some(prev) = idx.checked_sub(1).and_then(|i| self.free.get_mut(i)) {
            if prev.end() == block.offset {
                prev.len += block.len;
                return;
            }
        }

        self.free.insert(idx, block);
    }

    /// Track bytes left behind by a growth that failed part way
    fn reclaim_growth(&mut self, end: u64) {
        let grown = self.memory.size().saturating_sub(end);
        if grown > 0 {
            self.insert_free(Block {
                offset: end,
                len: grown,
            });
            // The growth error is reported; a failed shrink keeps the block free
            let _ = self.release_tail();
        }
    }

    fn release_tail(&mut self) -> Result<(), R::Error> {
        if let Some(&tail) = self.free.last() {
            if tail.end() == self.memory.size() {
                self.memory.reduce_size(tail.len)?;
                self.free.pop();
            }
        }
        Ok(())
    }
}

impl<R: RawMemory> MemoryManager for FreeListAllocator<R> {
    type Error = R::Error;

    fn allocate(&mut self, size: u64) -> Result<u64, R::Error> {
        if size == 0 {
            return Err(MemoryError::InvalidArgument("zero-sized allocation"));
        }

        let ptr = match self.take_free(size) {
            Some(ptr) => ptr,
            None => {
                let end = self.memory.size();
                if let Err(err) = self.memory.increase_size(size) {
                    self.reclaim_growth(end);
                    return Err(err);
                }
                end
            }
        };

        self.live.insert(ptr, size);
        Ok(ptr)
    }

    /// Release `ptr`
    ///
    /// A storage error here comes from shrinking the region. The block is
    /// already free by then and stays in the free list, so it must not be
    /// freed again; a later `free` at the tail retries the shrink.
    fn free(&mut self, ptr: u64) -> Result<(), R::Error> {
        let len = self
            .live
            .remove(&ptr)
            .ok_or(MemoryError::InvalidArgument("pointer is not a live allocation"))?;

        self.insert_free(Block { offset: ptr, len });
        self.release_tail()
    }
}
