//! # Store Port
//!
//! The block store API: a key-to-block registry scoped to some backing
//! medium. Higher layers (caching, encryption) wrap implementations of this
//! trait and stay generic over the concrete block type.

use crate::domain::errors::StoreError;
use crate::domain::key::BlockKey;
use crate::ports::block::Block;

/// Outcome of an exclusive create.
///
/// Losing a create race is an expected, recoverable outcome, not an error,
/// so it is modeled as an explicit variant rather than an error kind or a
/// sentinel value.
#[derive(Debug)]
pub enum CreateOutcome<B> {
    /// The block was created; the caller now owns the handle.
    Created(B),
    /// A block for this key already exists; it was left untouched.
    AlreadyExists,
}

impl<B> CreateOutcome<B> {
    /// The created block, if this caller won the create.
    pub fn created(self) -> Option<B> {
        match self {
            CreateOutcome::Created(block) => Some(block),
            CreateOutcome::AlreadyExists => None,
        }
    }

    /// Whether the key was already taken.
    pub fn is_already_exists(&self) -> bool {
        matches!(self, CreateOutcome::AlreadyExists)
    }
}

/// A manager of the key-to-block mapping.
///
/// Ownership of returned blocks transfers to the caller. The only
/// cross-caller ordering guarantee this layer provides is at creation:
/// concurrent [`BlockStore::try_create`] calls for one key resolve to
/// exactly one winner. All other operations on one key from multiple
/// callers are unsynchronized here and must be serialized by a layer above.
pub trait BlockStore: Send + Sync {
    /// The concrete block type this store hands out.
    type Block: Block;

    /// Atomically create a block for `key` with `initial_data` as content.
    ///
    /// Uses an exclusive create primitive, so checking existence and
    /// creating are one step and concurrent creators cannot both succeed.
    /// When the key is already taken the existing block is left completely
    /// untouched and [`CreateOutcome::AlreadyExists`] is returned. Any other
    /// filesystem failure surfaces as [`StoreError::Io`].
    fn try_create(
        &self,
        key: &BlockKey,
        initial_data: &[u8],
    ) -> Result<CreateOutcome<Self::Block>, StoreError>;

    /// Load the existing block for `key`.
    ///
    /// The returned block's size equals the stored length exactly. Fails
    /// with [`StoreError::BlockNotFound`] when no block exists.
    fn load(&self, key: &BlockKey) -> Result<Self::Block, StoreError>;

    /// Delete the block for `key`.
    ///
    /// Fails with [`StoreError::BlockNotFound`] when no block exists.
    fn remove(&self, key: &BlockKey) -> Result<(), StoreError>;

    /// Whether a block exists for `key`. No side effects.
    fn exists(&self, key: &BlockKey) -> bool;

    /// Enumerate the keys of every block in the store.
    fn keys(&self) -> Result<Vec<BlockKey>, StoreError>;
}
