//! Storage collaborator contract
//!
//! The storage collaborator persists the bytes and the logical size of a
//! memory region (a file, a memory map, a vector, ...). This crate consumes
//! the contract but performs no I/O itself.

use alloc::vec;
use alloc::vec::Vec;

/// Backend that persists bytes and a logical size
///
/// Implementations perform no bounds checking of their own beyond what the
/// medium enforces; callers such as [`crate::RawBuffer`] validate every range
/// first. Sharing one medium between several writers is out of contract.
pub trait Storage {
    /// Error reported by the medium
    type Error;

    /// Get the persisted size in bytes
    fn size(&self) -> Result<u64, Self::Error>;

    /// Persist a new size, zero-extending or truncating the medium
    fn set_size(&mut self, size: u64) -> Result<(), Self::Error>;

    /// Fill `buf` with the bytes starting at `offset`
    ///
    /// Must either fill the whole buffer or fail.
    fn read_exact_at(&self, offset: u64, buf: &mut [u8]) -> Result<(), Self::Error>;

    /// Write all of `data` starting at `offset`
    fn write_all_at(&mut self, offset: u64, data: &[u8]) -> Result<(), Self::Error>;

    /// Read exactly `len` bytes starting at `offset`
    fn read(&self, offset: u64, len: usize) -> Result<Vec<u8>, Self::Error> {
        let mut buf = vec![0u8; len];
        self.read_exact_at(offset, &mut buf)?;
        Ok(buf)
    }
}

impl<S: Storage + ?Sized> Storage for &mut S {
    type Error = S::Error;

    fn size(&self) -> Result<u64, Self::Error> {
        (**self).size()
    }

    fn set_size(&mut self, size: u64) -> Result<(), Self::Error> {
        (**self).set_size(size)
    }

    fn read_exact_at(&self, offset: u64, buf: &mut [u8]) -> Result<(), Self::Error> {
        (**self).read_exact_at(offset, buf)
    }

    fn write_all_at(&mut self, offset: u64, data: &[u8]) -> Result<(), Self::Error> {
        (**self).write_all_at(offset, data)
    }
}
