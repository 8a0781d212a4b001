//! Local persistence module.
//!
//! Each store field is mirrored into its own JSON file under the cache
//! directory, one `<key>.json` per key. Writes are best-effort: the store
//! logs a failed write and keeps going, so in-memory state stays
//! authoritative even when the disk is not cooperating.

pub mod adapter;

pub use adapter::{CacheAdapter, FileCache};
