//! # On-Disk Adapter
//!
//! Block storage backed by a directory: one regular file per block, named by
//! the key's canonical hex string, holding the block's raw content with no
//! header or framing.
//!
//! ## Module Structure
//!
//! - `block` - OnDiskBlock, a buffered handle on one block file
//! - `store` - OnDiskBlockStore, the directory-scoped factory/registry

mod block;
mod store;


pub use block::OnDiskBlock;
pub use store::OnDiskBlockStore;
