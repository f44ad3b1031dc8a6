//! # On-Disk Block Store
//!
//! The directory-scoped factory and registry. For every key that exists in
//! the store there is exactly one regular file in the root directory whose
//! name is the key's canonical hex string, and that file's length equals
//! the block's reported size.

use crate::domain::errors::StoreError;
use crate::domain::key::BlockKey;
use crate::ports::store::{BlockStore, CreateOutcome};
use std::path::{Path, PathBuf};

use super::block::OnDiskBlock;

/// A block store rooted at one directory.
///
/// The store hands out owned [`OnDiskBlock`] handles and does not retain
/// them; it exclusively owns the directory-to-key mapping. The atomicity of
/// exclusive create is the only cross-caller synchronization this store
/// provides.
pub struct OnDiskBlockStore {
    root: PathBuf,
}

impl OnDiskBlockStore {
    /// Open a store rooted at `root`, creating the directory if absent.
    pub fn new<P: AsRef<Path>>(root: P) -> Result<Self, StoreError> {
        let root = root.as_ref().to_path_buf();
        std::fs::create_dir_all(&root)?;

        #[cfg(feature = "tracing-log")]
        tracing::debug!("[blockstore] Opened block store at {}", root.display());

        Ok(Self { root })
    }

    /// The root directory this store is scoped to.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The file path for `key`: the canonical hex string under the root.
    fn block_path(&self, key: &BlockKey) -> PathBuf {
        self.root.join(key.to_string())
    }
}

impl BlockStore for OnDiskBlockStore {
    type Block = OnDiskBlock;

    fn try_create(
        &self,
        key: &BlockKey,
        initial_data: &[u8],
    ) -> Result<CreateOutcome<OnDiskBlock>, StoreError> {
        let outcome = OnDiskBlock::create_on_disk(*key, self.block_path(key), initial_data)?;

        #[cfg(feature = "tracing-log")]
        match &outcome {
            CreateOutcome::Created(_) => {
                tracing::debug!("[blockstore] Created block {} ({} bytes)", key, initial_data.len());
            }
            CreateOutcome::AlreadyExists => {
                tracing::debug!("[blockstore] Create lost race, block {} already exists", key);
            }
        }

        Ok(outcome)
    }

    fn load(&self, key: &BlockKey) -> Result<OnDiskBlock, StoreError> {
        OnDiskBlock::load_from_disk(*key, self.block_path(key))
    }

    fn remove(&self, key: &BlockKey) -> Result<(), StoreError> {
        match std::fs::remove_file(self.block_path(key)) {
            Ok(()) => {
                #[cfg(feature = "tracing-log")]
                tracing::debug!("[blockstore] Removed block {}", key);
                Ok(())
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                Err(StoreError::BlockNotFound { key: *key })
            }
            Err(err) => Err(err.into()),
        }
    }

    fn exists(&self, key: &BlockKey) -> bool {
        self.block_path(key).is_file()
    }

    fn keys(&self) -> Result<Vec<BlockKey>, StoreError> {
        let mut keys = Vec::new();
        for entry in std::fs::read_dir(&self.root)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            // Only canonical key names count as blocks; anything else in
            // the directory is not ours to report.
            let name = entry.file_name();
            if let Some(key) = name.to_str().and_then(|s| s.parse::<BlockKey>().ok()) {
                keys.push(key);
            }
        }
        Ok(keys)
    }
}
