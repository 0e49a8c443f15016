//! Bounds-checked raw buffer over a storage collaborator
//!
//! [`RawBuffer`] owns the authoritative size of a memory region. The size is
//! read from storage once at construction and afterwards only changes through
//! [`RawMemory::increase_size`] and [`RawMemory::reduce_size`], which persist
//! the new size before committing it locally.

use crate::traits::{RawMemory, Storage};
use crate::validation::{byte_len, check_range, shrunk_size};
use crate::{MemoryError, Result};

/// Chunk of zeros used to fill newly grown regions
const ZERO_CHUNK: [u8; 4096] = [0; 4096];

/// Growable byte region backed by a [`Storage`] collaborator
///
/// Concurrent mutation of the same storage through several buffers is not
/// supported; the tracked size would silently diverge from the medium.
#[derive(Debug)]
pub struct RawBuffer<S> {
    storage: S,
    size: u64,
}

impl<S: Storage> RawBuffer<S> {
    /// Bind a buffer to `storage`, reading its current size
    pub fn new(storage: S) -> Result<Self, S::Error> {
        let size = storage.size().map_err(MemoryError::Storage)?;
        Ok(Self { storage, size })
    }

    /// Borrow the storage collaborator
    pub fn storage(&self) -> &S {
        &self.storage
    }

    #[cfg(test)]
    pub(crate) fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    /// Release the storage collaborator
    pub fn into_inner(self) -> S {
        self.storage
    }

    /// Persist `new_size`, then track it
    fn resize_storage(&mut self, new_size: u64) -> Result<(), S::Error> {
        self.storage
            .set_size(new_size)
            .map_err(MemoryError::Storage)?;
        self.size = new_size;
        Ok(())
    }

    fn fill_zeros(&mut self, offset: u64, len: u64) -> Result<(), S::Error> {
        let mut written = 0u64;
        while written < len {
            let chunk = (len - written).min(byte_len(ZERO_CHUNK.len())) as usize;
            self.write_buffer(offset + written, &ZERO_CHUNK[..chunk])?;
            written += byte_len(chunk);
        }
        Ok(())
    }
}

impl<S: Storage> RawMemory for RawBuffer<S> {
    type Error = S::Error;

    fn size(&self) -> u64 {
        self.size
    }

    fn increase_size(&mut self, delta: u64) -> Result<(), S::Error> {
        let offset = self.size;
        let new_size = offset
            .checked_add(delta)
            .ok_or(MemoryError::InvalidArgument("size increase overflows u64"))?;
        self.resize_storage(new_size)?;
        self.fill_zeros(offset, delta)
    }

    fn reduce_size(&mut self, delta: u64) -> Result<(), S::Error> {
        self.resize_storage(shrunk_size(self.size, delta))
    }

    fn read_buffer_into(&self, offset: u64, buf: &mut [u8]) -> Result<(), S::Error> {
        check_range(offset, byte_len(buf.len()), self.size)?;
        self.storage
            .read_exact_at(offset, buf)
            .map_err(MemoryError::Storage)
    }

    fn write_buffer(&mut self, offset: u64, data: &[u8]) -> Result<(), S::Error> {
        check_range(offset, byte_len(data.len()), self.size)?;
        self.storage
            .write_all_at(offset, data)
            .map_err(MemoryError::Storage)
    }
}
