//! Cache Store Module
//!
//! Concurrent key-to-entry mapping backing a cache instance.
//!
//! The store is safe for simultaneous independent key operations from any
//! number of tasks; compound operations at the cache's semantic level are
//! coordinated by the facade's access guard, not here.

use std::time::Duration;

use dashmap::DashMap;

use crate::cache::entry::{current_timestamp_ms, CacheEntry};

// == Store ==
/// Concurrent mapping from string keys to cache entries.
///
/// Owned exclusively by one [`Cache`](crate::cache::Cache) instance and never
/// shared across instances.
#[derive(Debug)]
pub struct Store<T> {
    /// Key-value storage
    entries: DashMap<String, CacheEntry<T>>,
}

impl<T> Store<T> {
    // == Constructor ==
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Creates an empty store pre-sized for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: DashMap::with_capacity(capacity),
        }
    }

    // == Set ==
    /// Stores a key-value pair expiring `duration` from now.
    ///
    /// If the key already exists, the prior entry is replaced wholesale and
    /// its expiration is superseded. Overwriting is always legal.
    ///
    /// # Arguments
    /// * `key` - The key to store
    /// * `value` - The value to store
    /// * `duration` - How long the entry stays readable
    pub fn set(&self, key: String, value: T, duration: Duration) {
        let entry = CacheEntry::new(value, duration);
        self.entries.insert(key, entry);
    }

    // == Remove ==
    /// Unconditionally deletes the entry for `key` if present. Idempotent.
    ///
    /// # Arguments
    /// * `key` - The key to delete
    pub fn remove(&self, key: &str) {
        self.entries.remove(key);
    }

    // == Scan Expired ==
    /// Enumerates all keys whose entry expired strictly before `now`.
    ///
    /// This is the janitor's primitive: an entry expiring exactly at `now`
    /// is not yet reported, even though `lookup` already refuses to return
    /// it. The scan itself removes nothing.
    ///
    /// # Arguments
    /// * `now` - The sweep's reference timestamp (Unix milliseconds)
    pub fn scan_expired(&self, now: u64) -> Vec<String> {
        self.entries
            .iter()
            .filter(|entry| entry.value().is_sweepable(now))
            .map(|entry| entry.key().clone())
            .collect()
    }

    // == Contains Key ==
    /// Reports physical presence of `key`, expired or not.
    ///
    /// Unlike `lookup`, this observes the raw mapping: a lazily-expired entry
    /// that the janitor has not yet reclaimed still counts as present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    // == Length ==
    /// Returns the number of physically present entries, expired or not.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the store holds no entries at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: Clone> Store<T> {
    // == Lookup ==
    /// Retrieves a value by key.
    ///
    /// Returns the value only if an entry exists AND has not yet expired.
    /// A lazily-expired entry is NOT removed here: reads are side-effect-free
    /// and reclamation belongs to the janitor alone, so concurrent readers
    /// never race each other to delete the same key.
    ///
    /// # Arguments
    /// * `key` - The key to retrieve
    pub fn lookup(&self, key: &str) -> Option<T> {
        let now = current_timestamp_ms();
        self.entries
            .get(key)
            .filter(|entry| entry.is_live(now))
            .map(|entry| entry.value.clone())
    }
}

impl<T> Default for Store<T> {
    fn default() -> Self {
        Self::new()
    }
}
