//! # Block Store
//!
//! A directory-backed block storage engine. Each block is a variable-length
//! byte buffer addressed by a fixed-width key, persisted as exactly one
//! regular file whose name is the key's canonical hex form. The file's raw
//! content *is* the block's content: no header, no framing, file length
//! defines block size.
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Description |
//! |----|-----------|-------------|
//! | 1 | Exclusive Create | Concurrent creates for one key resolve to exactly one winner |
//! | 2 | Zero Fill | Bytes introduced by a grow read as zero, in memory and on disk |
//! | 3 | Size Equality | Buffer length equals reported size at every observable point |
//! | 4 | Canonical Names | A key maps to one filename; non-canonical names are rejected |
//!
//! Invariant 1 comes directly from the filesystem's atomic create-if-absent
//! primitive (`O_CREAT | O_EXCL`); no user-space locking is layered on top.
//! Any richer coordination (per-key mutexes, leases) belongs to a wrapping
//! layer such as a cache.
//!
//! ## Crate Structure (Hexagonal Architecture)
//!
//! - `domain/` - Pure domain types (keys, errors); no I/O
//! - `ports/` - Port traits (`Block` capability set, `BlockStore` API)
//! - `adapters/` - The on-disk adapter implementing the ports
//!
//! ## Usage
//!
//! ```no_run
//! use blockstore::{Block, BlockKey, BlockStore, CreateOutcome, OnDiskBlockStore};
//!
//! # fn main() -> Result<(), blockstore::StoreError> {
//! let store = OnDiskBlockStore::new("/var/lib/myapp/blocks")?;
//!
//! let key: BlockKey = "1491bb4932a389ee14bc7090ac772972".parse()?;
//! match store.try_create(&key, &[0u8; 1024])? {
//!     CreateOutcome::Created(block) => assert_eq!(block.size(), 1024),
//!     CreateOutcome::AlreadyExists => { /* another caller won the race */ }
//! }
//!
//! let mut block = store.load(&key)?;
//! block.write_range(0, b"hello")?;
//! block.flush()?;
//! # Ok(())
//! # }
//! ```
//!
//! Dirty blocks are **not** flushed on drop: callers that need durability
//! must call [`Block::flush`] before releasing the handle.

pub mod adapters;
pub mod domain;
pub mod ports;

// Re-export key types for convenience
pub use adapters::ondisk::{OnDiskBlock, OnDiskBlockStore};
pub use domain::errors::{KeyError, StoreError};
pub use domain::key::{BlockKey, KEY_HEX_LENGTH, KEY_LENGTH};
pub use ports::block::Block;
pub use ports::store::{BlockStore, CreateOutcome};
