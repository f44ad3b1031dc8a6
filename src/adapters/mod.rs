//! # Adapters
//!
//! Concrete implementations of the port traits.
//!
//! ## Modules
//!
//! - `ondisk`: one-file-per-block storage inside a root directory

pub mod ondisk;

pub use ondisk::{OnDiskBlock, OnDiskBlockStore};
