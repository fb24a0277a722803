//! Background Tasks Module
//!
//! Contains background tasks that run while a cache instance is live.
//!
//! # Tasks
//! - Janitor: removes expired cache entries on a fixed-delay schedule

mod janitor;

pub use janitor::Janitor;
