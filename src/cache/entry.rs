//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with absolute expiration.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

// == Cache Entry ==
/// A stored value paired with its absolute expiration timestamp.
///
/// An entry is immutable after construction: a `put` on an existing key
/// replaces the entry wholesale rather than mutating it in place.
#[derive(Debug, Clone)]
pub struct CacheEntry<T> {
    /// The stored value
    pub value: T,
    /// Expiration timestamp (Unix milliseconds)
    pub expires_at: u64,
}

impl<T> CacheEntry<T> {
    // == Constructor ==
    /// Creates a new cache entry expiring `duration` from now.
    ///
    /// # Arguments
    /// * `value` - The value to store
    /// * `duration` - How long the entry stays readable
    pub fn new(value: T, duration: Duration) -> Self {
        let expires_at = current_timestamp_ms() + duration.as_millis() as u64;

        Self { value, expires_at }
    }

    // == Is Live ==
    /// Checks whether the entry is still readable at `now`.
    ///
    /// Boundary condition: an entry is readable only while `expires_at > now`.
    /// At the exact expiration instant the entry is already unreadable, even
    /// though the janitor will not sweep it until the instant has passed
    /// (see [`is_sweepable`](Self::is_sweepable)).
    pub fn is_live(&self, now: u64) -> bool {
        self.expires_at > now
    }

    // == Is Sweepable ==
    /// Checks whether the janitor may reclaim the entry at `now`.
    ///
    /// Boundary condition: sweeping uses the strict inequality
    /// `expires_at < now`. An entry expiring exactly at `now` is not yet
    /// swept, but is already unreadable. This asymmetry is deliberate and
    /// must be preserved.
    pub fn is_sweepable(&self, now: u64) -> bool {
        self.expires_at < now
    }

    // == Time To Live ==
    /// Returns remaining lifetime in milliseconds, or 0 once expired.
    ///
    /// Useful for debugging and demonstration output.
    pub fn ttl_remaining_ms(&self) -> u64 {
        self.expires_at.saturating_sub(current_timestamp_ms())
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_millis() as u64
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_creation() {
        let entry = CacheEntry::new("test_value", Duration::from_secs(60));

        assert_eq!(entry.value, "test_value");
        assert!(entry.is_live(current_timestamp_ms()));
    }

    #[test]
    fn test_entry_expires_at_absolute() {
        let before = current_timestamp_ms();
        let entry = CacheEntry::new(1, Duration::from_millis(5000));
        let after = current_timestamp_ms();

        assert!(entry.expires_at >= before + 5000);
        assert!(entry.expires_at <= after + 5000);
    }

    #[test]
    fn test_boundary_unreadable_at_expiration() {
        let now = current_timestamp_ms();
        let entry = CacheEntry {
            value: 42,
            expires_at: now,
        };

        // At the exact expiration instant the entry is unreadable but not
        // yet sweepable.
        assert!(!entry.is_live(now));
        assert!(!entry.is_sweepable(now));
    }

    #[test]
    fn test_boundary_sweepable_after_expiration() {
        let now = current_timestamp_ms();
        let entry = CacheEntry {
            value: 42,
            expires_at: now,
        };

        assert!(entry.is_sweepable(now + 1));
    }

    #[test]
    fn test_boundary_live_before_expiration() {
        let now = current_timestamp_ms();
        let entry = CacheEntry {
            value: 42,
            expires_at: now + 1,
        };

        assert!(entry.is_live(now));
        assert!(!entry.is_sweepable(now));
    }

    #[test]
    fn test_ttl_remaining_ms() {
        let entry = CacheEntry::new("test_value", Duration::from_secs(10));

        let remaining = entry.ttl_remaining_ms();
        assert!(remaining <= 10_000);
        assert!(remaining >= 9_000);
    }

    #[test]
    fn test_ttl_remaining_expired() {
        let now = current_timestamp_ms();
        let entry = CacheEntry {
            value: "test",
            expires_at: now.saturating_sub(1000),
        };

        assert_eq!(entry.ttl_remaining_ms(), 0);
    }
}
