//! In-memory storage double for unit tests

use alloc::vec::Vec;

use crate::Storage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Fault(pub &'static str);

/// Vector-backed storage with switchable failures
#[derive(Debug, Default)]
pub(crate) struct MemStorage {
    pub data: Vec<u8>,
    pub fail_set_size: bool,
    pub fail_writes: bool,
    pub fail_reads: bool,
}

impl MemStorage {
    pub fn with_bytes(bytes: &[u8]) -> Self {
        Self {
            data: bytes.to_vec(),
            ..Self::default()
        }
    }
}

impl Storage for MemStorage {
    type Error = Fault;

    fn size(&self) -> Result<u64, Fault> {
        Ok(self.data.len() as u64)
    }

    fn set_size(&mut self, size: u64) -> Result<(), Fault> {
        if self.fail_set_size {
            return Err(Fault("set_size"));
        }
        self.data.resize(size as usize, 0);
        Ok(())
    }

    fn read_exact_at(&self, offset: u64, buf: &mut [u8]) -> Result<(), Fault> {
        if self.fail_reads {
            return Err(Fault("read"));
        }
        let start = offset as usize;
        let src = self
            .data
            .get(start..start + buf.len())
            .ok_or(Fault("short read"))?;
        buf.copy_from_slice(src);
        Ok(())
    }

    fn write_all_at(&mut self, offset: u64, data: &[u8]) -> Result<(), Fault> {
        if self.fail_writes {
            return Err(Fault("write"));
        }
        let start = offset as usize;
        let dst = self
            .data
            .get_mut(start..start + data.len())
            .ok_or(Fault("short write"))?;
        dst.copy_from_slice(data);
        Ok(())
    }
}
