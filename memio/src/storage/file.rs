//! Plain file storage
//!
//! Positions the file cursor for every access, so reads only need a shared
//! reference to the file handle.

use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use memio_core::Storage;
use tracing::{debug, trace};

use crate::config::StorageConfig;

/// Storage collaborator backed by a [`File`]
#[derive(Debug)]
pub struct FileStorage {
    file: File,
    path: Option<PathBuf>,
    sync_on_resize: bool,
}

impl FileStorage {
    /// Open the file at `path` according to `config`
    pub fn open<P: AsRef<Path>>(path: P, config: &StorageConfig) -> io::Result<Self> {
        let path = path.as_ref();
        let file = config.open_options().open(path)?;

        let mut storage = Self {
            file,
            path: Some(path.to_path_buf()),
            sync_on_resize: config.sync_on_resize,
        };

        let size = storage.size()?;
        if size < config.initial_size {
            storage.set_size(config.initial_size)?;
        }

        debug!(
            path = %path.display(),
            size = size.max(config.initial_size),
            "opened file storage"
        );
        Ok(storage)
    }

    /// Wrap an already opened file
    ///
    /// The file must be opened for both reading and writing.
    pub fn from_file(file: File) -> Self {
        Self {
            file,
            path: None,
            sync_on_resize: false,
        }
    }

    /// Path the storage was opened from, if known
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Flush data and metadata to disk
    pub fn sync(&self) -> io::Result<()> {
        self.file.sync_all()
    }

    /// Release the file handle
    pub fn into_file(self) -> File {
        self.file
    }
}

impl Storage for FileStorage {
    type Error = io::Error;

    fn size(&self) -> io::Result<u64> {
        Ok(self.file.metadata()?.len())
    }

    fn set_size(&mut self, size: u64) -> io::Result<()> {
        self.file.set_len(size)?;
        if self.sync_on_resize {
            self.file.sync_data()?;
        }
        debug!(size, "resized file storage");
        Ok(())
    }

    fn read_exact_at(&self, offset: u64, buf: &mut [u8]) -> io::Result<()> {
        trace!(offset, len = buf.len(), "file read");
        let mut file = &self.file;
        file.seek(SeekFrom::Start(offset))?;
        file.read_exact(buf)
    }

    fn write_all_at(&mut self, offset: u64, data: &[u8]) -> io::Result<()> {
        trace!(offset, len = data.len(), "file write");
        self.file.seek(SeekFrom::Start(offset))?;
        self.file.write_all(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_applies_initial_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("region.bin");

        let storage =
            FileStorage::open(&path, &StorageConfig::default().with_initial_size(16)).unwrap();
        assert_eq!(storage.size().unwrap(), 16);
        assert_eq!(storage.path(), Some(path.as_path()));
        assert_eq!(std::fs::metadata(&path).unwrap().len(), 16);
    }

    #[test]
    fn test_open_missing_without_create() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.bin");

        let err = FileStorage::open(&path, &StorageConfig::default().with_create(false))
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_read_write_resize() {
        let file = tempfile::tempfile().unwrap();
        let mut storage = FileStorage::from_file(file);
        assert_eq!(storage.size().unwrap(), 0);

        storage.set_size(8).unwrap();
        storage.write_all_at(2, &[1, 2, 3]).unwrap();
        assert_eq!(storage.read(0, 8).unwrap(), vec![0, 0, 1, 2, 3, 0, 0, 0]);

        storage.set_size(3).unwrap();
        assert_eq!(storage.size().unwrap(), 3);
        assert_eq!(storage.read(0, 3).unwrap(), vec![0, 0, 1]);
    }

    #[test]
    fn test_short_read_fails() {
        let file = tempfile::tempfile().unwrap();
        let mut storage = FileStorage::from_file(file);
        storage.set_size(2).unwrap();

        let err = storage.read(1, 4).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_truncate_on_open() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("region.bin");
        std::fs::write(&path, [9u8; 10]).unwrap();

        let kept = FileStorage::open(&path, &StorageConfig::default()).unwrap();
        assert_eq!(kept.size().unwrap(), 10);
        drop(kept);

        let fresh = FileStorage::open(&path, &StorageConfig::default().with_truncate(true))
            .unwrap();
        assert_eq!(fresh.size().unwrap(), 0);
    }
}
