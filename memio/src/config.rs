//! Configuration for opening file-backed storage

use std::fs::OpenOptions;

/// Options used when opening a [`FileStorage`](crate::FileStorage) or
/// [`MmapStorage`](crate::MmapStorage)
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct StorageConfig {
    /// Create the file if it does not exist
    pub create: bool,
    /// Discard existing contents on open
    pub truncate: bool,
    /// Minimum size in bytes; smaller files are zero-extended on open
    pub initial_size: u64,
    /// Call `sync_data` after every size change
    pub sync_on_resize: bool,
}

impl StorageConfig {
    /// Set whether a missing file is created
    pub fn with_create(mut self, create: bool) -> Self {
        self.create = create;
        self
    }

    /// Set whether existing contents are discarded
    pub fn with_truncate(mut self, truncate: bool) -> Self {
        self.truncate = truncate;
        self
    }

    /// Set the minimum size applied on open
    pub fn with_initial_size(mut self, initial_size: u64) -> Self {
        self.initial_size = initial_size;
        self
    }

    /// Set whether size changes are synced to disk immediately
    pub fn with_sync_on_resize(mut self, sync_on_resize: bool) -> Self {
        self.sync_on_resize = sync_on_resize;
        self
    }

    /// Parse a configuration from JSON; missing fields take their defaults
    #[cfg(feature = "serde")]
    pub fn from_json_str(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub(crate) fn open_options(&self) -> OpenOptions {
        let mut options = OpenOptions::new();
        options
            .read(true)
            .write(true)
            .create(self.create)
            .truncate(self.truncate);
        options
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            create: true,
            truncate: false,
            initial_size: 0,
            sync_on_resize: false,
        }
    }
}
