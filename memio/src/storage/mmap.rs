//! Memory-mapped file storage
//!
//! The whole file is mapped read-write. Resizing flushes and drops the map,
//! changes the file length, and maps the file again. An empty file has no
//! mapping at all since zero-length maps are rejected by the OS.

use std::fs::File;
use std::io;
use std::path::Path;

use memio_core::Storage;
use memmap2::{MmapMut, MmapOptions};
use tracing::{debug, trace, warn};

use crate::config::StorageConfig;

fn to_usize(value: u64) -> io::Result<usize> {
    usize::try_from(value)
        .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "offset exceeds address space"))
}

fn past_end() -> io::Error {
    io::Error::new(io::ErrorKind::UnexpectedEof, "access past end of mapping")
}

/// Storage collaborator backed by a writable memory map
#[derive(Debug)]
pub struct MmapStorage {
    file: File,
    map: Option<MmapMut>,
    len: u64,
    sync_on_resize: bool,
}

impl MmapStorage {
    /// Open and map the file at `path` according to `config`
    pub fn open<P: AsRef<Path>>(path: P, config: &StorageConfig) -> io::Result<Self> {
        let path = path.as_ref();
        let file = config.open_options().open(path)?;

        let mut len = file.metadata()?.len();
        if len < config.initial_size {
            file.set_len(config.initial_size)?;
            len = config.initial_size;
        }

        let map = Self::map_file(&file, len)?;
        debug!(path = %path.display(), size = len, "mapped file storage");

        Ok(Self {
            file,
            map,
            len,
            sync_on_resize: config.sync_on_resize,
        })
    }

    fn map_file(file: &File, len: u64) -> io::Result<Option<MmapMut>> {
        if len == 0 {
            return Ok(None);
        }

        // SAFETY: The file is opened read-write and owned by this storage for
        // the lifetime of the map. Modifying the file through other handles
        // while mapped is outside the storage contract.
        let map = unsafe { MmapOptions::new().len(to_usize(len)?).map_mut(file)? };
        Ok(Some(map))
    }

    fn bytes(&self) -> &[u8] {
        self.map.as_deref().unwrap_or(&[])
    }

    fn range(offset: u64, len: usize) -> io::Result<std::ops::Range<usize>> {
        let start = to_usize(offset)?;
        let end = start.checked_add(len).ok_or_else(past_end)?;
        Ok(start..end)
    }

    /// Map the file at its current length
    ///
    /// `len` always describes the live mapping, so a failure leaves an empty
    /// storage rather than a stale length.
    fn remap(&mut self) -> io::Result<()> {
        self.len = 0;
        let len = self.file.metadata()?.len();
        self.map = Self::map_file(&self.file, len)?;
        self.len = len;
        Ok(())
    }

    /// Flush outstanding changes in the mapping to disk
    pub fn flush(&self) -> io::Result<()> {
        match &self.map {
            Some(map) => map.flush(),
            None => Ok(()),
        }
    }
}

impl Storage for MmapStorage {
    type Error = io::Error;

    fn size(&self) -> io::Result<u64> {
        Ok(self.len)
    }

    fn set_size(&mut self, size: u64) -> io::Result<()> {
        self.flush()?;
        self.map = None;

        let resized = self.file.set_len(size);
        // Remap whatever length the file has now, even if the resize failed
        let remapped = self.remap();
        resized?;
        remapped?;

        if self.sync_on_resize {
            self.file.sync_data()?;
        }
        debug!(size, "remapped file storage");
        Ok(())
    }

    fn read_exact_at(&self, offset: u64, buf: &mut [u8]) -> io::Result<()> {
        trace!(offset, len = buf.len(), "mmap read");
        let range = Self::range(offset, buf.len())?;
        let src = self.bytes().get(range).ok_or_else(past_end)?;
        buf.copy_from_slice(src);
        Ok(())
    }

    fn write_all_at(&mut self, offset: u64, data: &[u8]) -> io::Result<()> {
        trace!(offset, len = data.len(), "mmap write");
        let range = Self::range(offset, data.len())?;
        if range.is_empty() && range.start as u64 <= self.len {
            return Ok(());
        }
        let dst = self
            .map
            .as_deref_mut()
            .and_then(|bytes| bytes.get_mut(range))
            .ok_or_else(past_end)?;
        dst.copy_from_slice(data);
        Ok(())
    }
}

impl Drop for MmapStorage {
    fn drop(&mut self) {
        if let Err(err) = self.flush() {
            warn!(error = %err, "failed to flush mapping on drop");
        }
    }
}
