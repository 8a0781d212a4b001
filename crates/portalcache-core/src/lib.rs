//! Core library for portalcache.
//!
//! Everything the UI needs to browse and cache the Rick and Morty character
//! catalog lives here:
//!
//! - `models`: serde types mirroring the API's JSON shape
//! - `api`: HTTP client and the per-page fetch state
//! - `cache`: file-backed key/value persistence
//! - `store`: the in-memory character store, mirrored into the cache
//! - `config`: on-disk application configuration

pub mod api;
pub mod cache;
pub mod config;
pub mod models;
pub mod store;

pub use api::{ApiClient, ApiError, CharacterFetcher};
pub use cache::{CacheAdapter, FileCache};
pub use config::Config;
pub use models::{ApiInfo, Character, CharacterPage};
pub use store::CharacterStore;
