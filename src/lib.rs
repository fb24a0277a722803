//! TTL Cache - An embeddable in-memory cache with absolute expiration
//!
//! Every stored entry carries an absolute expiration timestamp; expired
//! entries become unreadable immediately and are reclaimed by a recurring
//! background janitor. A single eviction hook fires at shutdown.

pub mod cache;
pub mod config;
pub mod error;
pub mod tasks;

pub use cache::{Cache, CacheEntry, DefaultEvictedHandler, EvictedHandler, Store};
pub use config::Config;
pub use tasks::Janitor;
