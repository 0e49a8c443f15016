//! Raw byte-range contract

use alloc::vec;
use alloc::vec::Vec;

use crate::validation::{byte_len, check_range};
use crate::Result;

/// Bounds-checked byte-range access with capacity management
///
/// Every read and write is validated against [`RawMemory::size`] before it
/// reaches storage. Writes never grow the region.
pub trait RawMemory {
    /// Error type of the underlying storage collaborator
    type Error;

    /// Current addressable size in bytes
    fn size(&self) -> u64;

    /// Grow the region by `delta` zero-filled bytes
    fn increase_size(&mut self, delta: u64) -> Result<(), Self::Error>;

    /// Shrink the region by `delta` bytes, clamped at zero
    fn reduce_size(&mut self, delta: u64) -> Result<(), Self::Error>;

    /// Fill `buf` with the bytes at `offset`
    fn read_buffer_into(&self, offset: u64, buf: &mut [u8]) -> Result<(), Self::Error>;

    /// Write `data` at `offset`
    fn write_buffer(&mut self, offset: u64, data: &[u8]) -> Result<(), Self::Error>;

    /// Read exactly `len` bytes at `offset`
    ///
    /// The range is validated before the output buffer is allocated.
    fn read_buffer(&self, offset: u64, len: usize) -> Result<Vec<u8>, Self::Error> {
        check_range(offset, byte_len(len), self.size())?;
        let mut buf = vec![0u8; len];
        self.read_buffer_into(offset, &mut buf)?;
        Ok(buf)
    }
}
