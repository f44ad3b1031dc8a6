//! # On-Disk Block
//!
//! A buffered handle on one block file. All reads and writes go through the
//! in-memory buffer; the file is only touched by [`OnDiskBlock::flush`] and
//! at creation time.

use crate::domain::errors::StoreError;
use crate::domain::key::BlockKey;
use crate::ports::block::Block;
use crate::ports::store::CreateOutcome;
use std::fs::{File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::PathBuf;

/// A block bound to one regular file.
///
/// The handle owns its buffer and its file binding until dropped. The
/// buffer length and the reported size are the same value, so they cannot
/// diverge; after a successful flush the on-disk length equals it too.
///
/// ## Release policy
///
/// Dropping a dirty block **discards** the unflushed changes; no I/O
/// happens on drop. Callers that need durability call [`Block::flush`]
/// before releasing the handle.
#[derive(Debug)]
pub struct OnDiskBlock {
    key: BlockKey,
    path: PathBuf,
    data: Vec<u8>,
    dirty: bool,
}

impl OnDiskBlock {
    /// Exclusively create the file at `path` and write `data` as its
    /// entire content.
    ///
    /// Creation and the existence check are one atomic filesystem step
    /// (`O_CREAT | O_EXCL`), which is what gives concurrent creators an
    /// at-most-one-winner guarantee. When the file already exists it is
    /// left byte-for-byte untouched.
    pub(super) fn create_on_disk(
        key: BlockKey,
        path: PathBuf,
        data: &[u8],
    ) -> Result<CreateOutcome<Self>, StoreError> {
        let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => file,
            Err(err) if err.kind() == ErrorKind::AlreadyExists => {
                return Ok(CreateOutcome::AlreadyExists);
            }
            Err(err) => return Err(err.into()),
        };
        file.write_all(data)?;
        file.sync_all()?;

        Ok(CreateOutcome::Created(OnDiskBlock {
            key,
            path,
            data: data.to_vec(),
            dirty: false,
        }))
    }

    /// Load the file at `path` in full.
    ///
    /// The block's size is the file length exactly; a missing file maps to
    /// [`StoreError::BlockNotFound`].
    pub(super) fn load_from_disk(key: BlockKey, path: PathBuf) -> Result<Self, StoreError> {
        let data = match std::fs::read(&path) {
            Ok(data) => data,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Err(StoreError::BlockNotFound { key });
            }
            Err(err) => return Err(err.into()),
        };

        Ok(OnDiskBlock {
            key,
            path,
            data,
            dirty: false,
        })
    }

    /// Bounds check shared by reads and writes.
    fn check_range(&self, offset: usize, len: usize) -> Result<(), StoreError> {
        let in_bounds = offset
            .checked_add(len)
            .is_some_and(|end| end <= self.data.len());
        if in_bounds {
            Ok(())
        } else {
            Err(StoreError::OutOfRange {
                offset,
                requested: len,
                size: self.data.len(),
            })
        }
    }
}

impl Block for OnDiskBlock {
    fn key(&self) -> &BlockKey {
        &self.key
    }

    fn size(&self) -> usize {
        self.data.len()
    }

    fn data(&self) -> &[u8] {
        &self.data
    }

    fn read_range(&self, offset: usize, len: usize) -> Result<&[u8], StoreError> {
        self.check_range(offset, len)?;
        Ok(&self.data[offset..offset + len])
    }

    fn write_range(&mut self, offset: usize, bytes: &[u8]) -> Result<(), StoreError> {
        self.check_range(offset, bytes.len())?;
        self.data[offset..offset + bytes.len()].copy_from_slice(bytes);
        self.dirty = true;
        Ok(())
    }

    fn resize(&mut self, new_size: usize) {
        // Vec::resize zero-fills the grown range; stale content is never
        // carried into it.
        self.data.resize(new_size, 0);
        self.dirty = true;
    }

    fn flush(&mut self) -> Result<(), StoreError> {
        if !self.dirty {
            return Ok(());
        }

        // Full-buffer rewrite: the file length always lands on exactly the
        // buffer length, including after a shrink or a zero-filled grow.
        let mut file = File::create(&self.path)?;
        file.write_all(&self.data)?;
        file.sync_all()?;
        self.dirty = false;

        #[cfg(debug_assertions)]
        if let Ok(meta) = std::fs::metadata(&self.path) {
            debug_assert_eq!(meta.len(), self.data.len() as u64);
        }

        #[cfg(feature = "tracing-log")]
        tracing::debug!("[blockstore] Flushed block {} ({} bytes)", self.key, self.data.len());

        Ok(())
    }

    fn is_dirty(&self) -> bool {
        self.dirty
    }
}
