//! # Block Port
//!
//! The capability set a block handle exposes to callers.

use crate::domain::errors::StoreError;
use crate::domain::key::BlockKey;

/// An addressable, resizable byte buffer bound to a key.
///
/// A block owns its buffer; `buffer length == size()` holds at every
/// observable instant. Mutations (`write_range`, `resize`) mark the block
/// dirty and touch only the buffer; [`Block::flush`] persists the buffer and
/// clears the dirty flag. A block moves between exactly two states:
///
/// ```text
/// Clean ──write_range/resize──→ Dirty ──flush──→ Clean
/// ```
///
/// Whether dropping a dirty block persists its changes is an implementation
/// policy; the on-disk implementation discards them, so callers flush
/// explicitly when durability is required.
pub trait Block: Send {
    /// The key this block is bound to.
    fn key(&self) -> &BlockKey;

    /// Current size in bytes. Always equals the buffer length.
    fn size(&self) -> usize;

    /// The full buffer content.
    fn data(&self) -> &[u8];

    /// A bounds-checked view of `len` bytes starting at `offset`.
    ///
    /// Fails with [`StoreError::OutOfRange`] when `offset + len` exceeds the
    /// current size.
    fn read_range(&self, offset: usize, len: usize) -> Result<&[u8], StoreError>;

    /// Overwrite buffer bytes in place, starting at `offset`.
    ///
    /// Fails with [`StoreError::OutOfRange`] when the write would reach past
    /// the current size; the buffer is not grown implicitly. Marks the block
    /// dirty. The file is untouched until [`Block::flush`].
    fn write_range(&mut self, offset: usize, bytes: &[u8]) -> Result<(), StoreError>;

    /// Change the block's size.
    ///
    /// Growing zero-fills every newly introduced byte; stale memory or disk
    /// content is never observable through a grown range. Shrinking drops
    /// the discarded bytes. Marks the block dirty.
    fn resize(&mut self, new_size: usize);

    /// Persist the buffer if the block is dirty.
    ///
    /// After a successful flush the on-disk length equals `size()` and the
    /// file bytes equal the buffer exactly. A no-op on a clean block.
    fn flush(&mut self) -> Result<(), StoreError>;

    /// Whether the block carries unflushed changes.
    fn is_dirty(&self) -> bool;
}
