//! # Ports
//!
//! The interfaces this crate exposes to higher layers (caching, encryption,
//! a filesystem built on top of blocks).
//!
//! ## Modules
//!
//! - `block` - The `Block` capability set (size, read, write, resize, flush)
//! - `store` - The `BlockStore` API (create, load, remove, exists, keys)

pub mod block;
pub mod store;

pub use block::Block;
pub use store::{BlockStore, CreateOutcome};
