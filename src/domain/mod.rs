//! # Domain Layer
//!
//! Pure domain types for the block store.
//! This layer performs no I/O - only value types and their validation.
//!
//! ## Modules
//!
//! - `key` - Fixed-width block keys and their canonical hex encoding
//! - `errors` - Error taxonomy for key parsing and store operations

pub mod errors;
pub mod key;
