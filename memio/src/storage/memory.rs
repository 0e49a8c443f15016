//! In-memory storage

use std::io;

use memio_core::Storage;

fn past_end() -> io::Error {
    io::Error::new(io::ErrorKind::UnexpectedEof, "access past end of vector")
}

fn out_of_memory<E>(err: E) -> io::Error
where
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    io::Error::new(io::ErrorKind::OutOfMemory, err)
}

/// Storage collaborator backed by a `Vec<u8>`
///
/// Useful for tests and for building a region in memory before persisting it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VecStorage {
    data: Vec<u8>,
}

impl VecStorage {
    /// Create empty storage
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrow the stored bytes
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Release the stored bytes
    pub fn into_inner(self) -> Vec<u8> {
        self.data
    }

    fn range(&self, offset: u64, len: usize) -> io::Result<std::ops::Range<usize>> {
        let start = usize::try_from(offset).map_err(|_| past_end())?;
        let end = start.checked_add(len).ok_or_else(past_end)?;
        if end > self.data.len() {
            return Err(past_end());
        }
        Ok(start..end)
    }
}

impl From<Vec<u8>> for VecStorage {
    fn from(data: Vec<u8>) -> Self {
        Self { data }
    }
}

impl Storage for VecStorage {
    type Error = io::Error;

    fn size(&self) -> io::Result<u64> {
        Ok(self.data.len() as u64)
    }

    fn set_size(&mut self, size: u64) -> io::Result<()> {
        let size = usize::try_from(size).map_err(|_| out_of_memory("size exceeds address space"))?;
        if let Some(additional) = size.checked_sub(self.data.len()) {
            self.data.try_reserve_exact(additional).map_err(out_of_memory)?;
        }
        self.data.resize(size, 0);
        Ok(())
    }

    fn read_exact_at(&self, offset: u64, buf: &mut [u8]) -> io::Result<()> {
        let range = self.range(offset, buf.len())?;
        buf.copy_from_slice(&self.data[range]);
        Ok(())
    }

    fn write_all_at(&mut self, offset: u64, data: &[u8]) -> io::Result<()> {
        let range = self.range(offset, data.len())?;
        self.data[range].copy_from_slice(data);
        Ok(())
    }
}
