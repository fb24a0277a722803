//! Cache Module
//!
//! Provides in-memory caching with absolute per-entry expiration, a
//! background janitor sweep and an eviction hook fired at shutdown.

mod entry;
mod facade;
mod store;


// Re-export public types
pub use entry::{current_timestamp_ms, CacheEntry};
pub use facade::{Cache, DefaultEvictedHandler, EvictedHandler};
pub use store::Store;
