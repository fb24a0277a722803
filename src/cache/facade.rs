//! Cache Facade Module
//!
//! Public cache object composing the store, the access guard, the janitor
//! and the eviction hook behind `put`, `get` and `close`.

use std::any::Any;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::cache::entry::current_timestamp_ms;
use crate::cache::Store;
use crate::tasks::Janitor;

// == Eviction Hook ==
/// Callback fired once per `close` call, at cache shutdown.
///
/// The default hook only cancels the janitor. A custom hook replaces that
/// behavior entirely: if it does not cancel the janitor itself (via
/// [`Cache::janitor`]), the background sweep keeps running against a store
/// the caller may consider dead. That is the caller's responsibility.
pub trait EvictedHandler<T>: Send + Sync {
    /// Invoked synchronously from `close`.
    ///
    /// # Arguments
    /// * `cache` - The cache being closed
    /// * `args` - Opaque argument slot, currently always `None`
    fn on_evicted(&self, cache: &Cache<T>, args: Option<&dyn Any>);
}

/// Default eviction hook: cancels the janitor and nothing else.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultEvictedHandler;

impl<T> EvictedHandler<T> for DefaultEvictedHandler {
    fn on_evicted(&self, cache: &Cache<T>, _args: Option<&dyn Any>) {
        cache.janitor().cancel();
    }
}

// == Cache ==
/// In-memory key-value cache with absolute per-entry expiration.
///
/// Construction immediately schedules the janitor's first sweep at zero
/// delay, so a cache must be created from within a Tokio runtime. The store
/// is owned exclusively by this instance and never shared with another.
pub struct Cache<T> {
    /// Reserved configuration: stored but not consulted by `put`, which
    /// always takes an explicit duration.
    default_expiration: Duration,
    /// Fixed delay between janitor sweeps
    cleanup_interval: Duration,
    /// Concurrent key-to-entry mapping
    store: Arc<Store<T>>,
    /// Access guard: serializes the cache's own compound `put`/`get`
    /// operations at the cache's semantic level. The store is independently
    /// safe; the janitor deliberately bypasses this lock.
    guard: RwLock<()>,
    /// Background sweep task, exactly one per live cache
    janitor: Janitor,
    /// Hook fired from `close`
    evicted_handler: Box<dyn EvictedHandler<T>>,
}

impl<T: Clone + Send + Sync + 'static> Cache<T> {
    // == Constructors ==
    /// Creates a cache with an empty store and the default eviction hook.
    ///
    /// # Arguments
    /// * `default_expiration` - Reserved fallback expiration (stored, unused)
    /// * `cleanup_interval` - Fixed delay between janitor sweeps
    ///
    /// # Panics
    /// Panics if called outside a Tokio runtime.
    pub fn new(default_expiration: Duration, cleanup_interval: Duration) -> Self {
        Self::with_capacity(default_expiration, cleanup_interval, 0)
    }

    /// Same as [`new`](Self::new), with an initial capacity hint for the
    /// underlying map.
    pub fn with_capacity(
        default_expiration: Duration,
        cleanup_interval: Duration,
        capacity: usize,
    ) -> Self {
        Self::with_handler(
            default_expiration,
            cleanup_interval,
            capacity,
            Box::new(DefaultEvictedHandler),
        )
    }

    /// Same as [`with_capacity`](Self::with_capacity), with a caller-supplied
    /// eviction hook in place of the default one.
    pub fn with_handler(
        default_expiration: Duration,
        cleanup_interval: Duration,
        capacity: usize,
        evicted_handler: Box<dyn EvictedHandler<T>>,
    ) -> Self {
        let store = Arc::new(Store::with_capacity(capacity));
        let janitor = Janitor::start(cleanup_interval, sweep_fn(Arc::clone(&store)));

        Self {
            default_expiration,
            cleanup_interval,
            store,
            guard: RwLock::new(()),
            janitor,
            evicted_handler,
        }
    }

    // == Put ==
    /// Stores a key-value pair expiring `duration` from now.
    ///
    /// Takes exclusive access on the guard for the duration of the insert.
    /// Never fails; an existing entry for the key is silently replaced and
    /// its expiration superseded.
    ///
    /// # Arguments
    /// * `key` - The key to store
    /// * `value` - The value to store
    /// * `duration` - How long the entry stays readable
    pub async fn put(&self, key: impl Into<String>, value: T, duration: Duration) {
        let _guard = self.guard.write().await;
        self.store.set(key.into(), value, duration);
    }

    // == Get ==
    /// Retrieves a value by key.
    ///
    /// Takes shared access on the guard, so reads run concurrently with each
    /// other and serialize only against an in-flight `put`. Returns `None`
    /// for missing or expired keys; never fails. A returned value was valid
    /// at read time even if the janitor reclaims the entry immediately after.
    ///
    /// # Arguments
    /// * `key` - The key to retrieve
    pub async fn get(&self, key: &str) -> Option<T> {
        let _guard = self.guard.read().await;
        self.store.lookup(key)
    }

}

impl<T> Cache<T> {
    // == Close ==
    /// Fires the eviction hook, passing this cache and an empty argument
    /// slot. With the default hook this cancels the janitor, after which no
    /// further sweep executes.
    ///
    /// Not idempotent-hardened: calling `close` twice invokes the hook twice.
    pub fn close(&self) {
        self.evicted_handler.on_evicted(self, None);
    }

    // == Accessors ==
    /// The janitor associated with this cache.
    pub fn janitor(&self) -> &Janitor {
        &self.janitor
    }

    /// The underlying store. Physical presence observed here may include
    /// lazily-expired entries the janitor has not reclaimed yet.
    pub fn store(&self) -> &Store<T> {
        &self.store
    }

    /// Reserved default expiration (never consulted by `put`).
    pub fn default_expiration(&self) -> Duration {
        self.default_expiration
    }

    /// Fixed delay between janitor sweeps.
    pub fn cleanup_interval(&self) -> Duration {
        self.cleanup_interval
    }
}

// == Sweep ==
/// Builds the janitor's sweep closure over a shared store handle.
///
/// The sweep scans for entries that expired strictly before the sweep's
/// reference time and deletes each one directly on the store, bypassing the
/// access guard. Deleting relies only on the map's own safety, so a `get`
/// may race a janitor deletion; the value a reader already obtained was
/// valid at read time. Nothing in the scan can fail per entry; a key missed
/// by one cycle simply remains expired and is reclaimed by the next.
fn sweep_fn<T: Send + Sync + 'static>(store: Arc<Store<T>>) -> impl FnMut() {
    move || {
        let now = current_timestamp_ms();
        let expired = store.scan_expired(now);
        let removed = expired.len();

        for key in &expired {
            store.remove(key);
        }

        if removed > 0 {
            info!("Janitor sweep: removed {} expired entries", removed);
        } else {
            debug!("Janitor sweep: no expired entries found");
        }
    }
}
