use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use dashmap::DashMap;
use gateplane_domain::{CacheConfig, ConfigError, DomainError};
use rustc_hash::FxBuildHasher;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info, warn};

use super::codec;
use super::key::{CacheKey, EntityKind};
use super::metrics::{CacheMetrics, CacheStats};

/// Fixed per-entry cost added on top of key and payload bytes, covering
/// map-slot and expiry bookkeeping.
const ENTRY_OVERHEAD: usize = 64;

enum Payload {
    /// Encoded entity value
    Value(Arc<[u8]>),

    /// Recorded not-found outcome, with the original error detail
    Negative(Box<str>),
}

struct CacheEntry {
    payload: Payload,
    expires_at: Instant,
    cost: usize,
}

impl CacheEntry {
    fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

enum Lookup {
    Value(Arc<[u8]>),
    Negative(String),
    Absent,
}

/// Bounded read-through cache holding every entity kind of the plane.
///
/// Constructed once at process start and passed by reference into each
/// cached store adapter; tests instantiate independent engines. TTL expiry
/// is checked lazily on read, capacity is a byte budget enforced on insert.
pub struct EntityCache {
    entries: DashMap<CacheKey, CacheEntry, FxBuildHasher>,
    capacity_bytes: usize,
    resident_bytes: AtomicUsize,
    ttl: Duration,
    negative_ttl: Option<Duration>,
    metrics: Arc<CacheMetrics>,
}

impl EntityCache {
    /// Build an engine from validated configuration.
    ///
    /// An unusable configuration is refused here, so the plane fails closed
    /// at startup instead of running uncached.
    pub fn new(config: &CacheConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let negative_ttl = config
            .negative_caching_enabled()
            .then(|| Duration::from_secs(config.negative_ttl_seconds));

        info!(
            capacity_bytes = config.capacity_bytes,
            ttl_seconds = config.ttl_seconds,
            negative_ttl_seconds = config.negative_ttl_seconds,
            "Initializing entity cache"
        );

        Ok(Self::with_ttls(
            config.capacity_bytes,
            Duration::from_secs(config.ttl_seconds),
            negative_ttl,
        ))
    }

    /// Build an engine with explicit durations. Used by `new` and by tests
    /// that need sub-second TTLs.
    pub fn with_ttls(capacity_bytes: usize, ttl: Duration, negative_ttl: Option<Duration>) -> Self {
        Self {
            entries: DashMap::with_hasher(FxBuildHasher),
            capacity_bytes,
            resident_bytes: AtomicUsize::new(0),
            ttl,
            negative_ttl,
            metrics: Arc::new(CacheMetrics::default()),
        }
    }

    /// Read-through fetch: return the cached value for `kind`/`item`, or
    /// invoke `loader` on a miss and cache its result.
    ///
    /// Loader errors are returned unchanged; only a `NotFound` outcome is
    /// recorded (as a negative entry) and only while negative caching is
    /// enabled. Hit and miss paths both return data decoded from the
    /// encoded payload, so they are representation-identical.
    pub async fn fetch_or_load<T, F, Fut>(
        &self,
        kind: EntityKind,
        item: &str,
        loader: F,
    ) -> Result<T, DomainError>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, DomainError>>,
    {
        let key = CacheKey::new(kind, item);

        match self.lookup(&key) {
            Lookup::Value(payload) => {
                self.metrics.record_hit(kind);
                debug!(key = %key.render(), "cache hit");
                return codec::decode(&payload);
            }
            Lookup::Negative(detail) => {
                self.metrics.record_negative_hit(kind);
                debug!(key = %key.render(), "negative cache hit");
                return Err(DomainError::NotFound(detail));
            }
            Lookup::Absent => {}
        }

        self.metrics.record_miss(kind);
        debug!(key = %key.render(), "cache miss");

        match loader().await {
            Ok(value) => {
                let payload = codec::encode(&value)?;
                let decoded = codec::decode(&payload)?;
                self.store_value(key, payload);
                Ok(decoded)
            }
            Err(DomainError::NotFound(detail)) => {
                if let Some(ttl) = self.negative_ttl {
                    self.store_negative(key, &detail, ttl);
                }
                Err(DomainError::NotFound(detail))
            }
            Err(e) => Err(e),
        }
    }

    /// Best-effort removal of one entry. Never surfaces an error: failing
    /// to evict must not block the authoritative backing-store write.
    pub fn invalidate(&self, kind: EntityKind, item: &str) {
        let key = CacheKey::new(kind, item);
        if let Some((_, entry)) = self.entries.remove(&key) {
            self.resident_bytes.fetch_sub(entry.cost, Ordering::Relaxed);
            self.metrics.invalidations.fetch_add(1, Ordering::Relaxed);
            debug!(key = %key.render(), "invalidated");
        }
    }

    fn lookup(&self, key: &CacheKey) -> Lookup {
        let now = Instant::now();

        let Some(entry) = self.entries.get(key) else {
            return Lookup::Absent;
        };

        if entry.is_expired(now) {
            drop(entry);
            self.remove_expired(key);
            return Lookup::Absent;
        }

        match &entry.payload {
            Payload::Value(payload) => Lookup::Value(Arc::clone(payload)),
            Payload::Negative(detail) => Lookup::Negative(detail.to_string()),
        }
    }

    fn remove_expired(&self, key: &CacheKey) {
        if let Some((_, entry)) = self.entries.remove(key) {
            self.resident_bytes.fetch_sub(entry.cost, Ordering::Relaxed);
            self.metrics.expirations.fetch_add(1, Ordering::Relaxed);
            debug!(key = %key.render(), "entry expired (lazy)");
        }
    }

    fn store_value(&self, key: CacheKey, payload: Vec<u8>) {
        let cost = key.cost() + payload.len() + ENTRY_OVERHEAD;
        if cost > self.capacity_bytes {
            warn!(
                key = %key.render(),
                cost = cost,
                capacity_bytes = self.capacity_bytes,
                "entry exceeds cache capacity, not stored"
            );
            return;
        }

        self.make_room_for(cost);
        self.insert_entry(
            key,
            CacheEntry {
                payload: Payload::Value(Arc::from(payload)),
                expires_at: Instant::now() + self.ttl,
                cost,
            },
        );
    }

    fn store_negative(&self, key: CacheKey, detail: &str, ttl: Duration) {
        let cost = key.cost() + detail.len() + ENTRY_OVERHEAD;
        if cost > self.capacity_bytes {
            return;
        }

        self.make_room_for(cost);
        self.insert_entry(
            key,
            CacheEntry {
                payload: Payload::Negative(Box::from(detail)),
                expires_at: Instant::now() + ttl,
                cost,
            },
        );
    }

    fn insert_entry(&self, key: CacheKey, entry: CacheEntry) {
        let cost = entry.cost;
        if let Some(previous) = self.entries.insert(key, entry) {
            self.resident_bytes
                .fetch_sub(previous.cost, Ordering::Relaxed);
        }
        self.resident_bytes.fetch_add(cost, Ordering::Relaxed);
        self.metrics.insertions.fetch_add(1, Ordering::Relaxed);
    }

    /// Evict randomly sampled entries until `cost` more bytes fit in the
    /// budget. Random sampling keeps eviction O(1) per victim and needs no
    /// global ordering over the sharded map.
    fn make_room_for(&self, cost: usize) {
        while self.resident_bytes.load(Ordering::Relaxed) + cost > self.capacity_bytes {
            if !self.evict_random_entry() {
                break;
            }
        }
    }

    fn evict_random_entry(&self) -> bool {
        let len = self.entries.len();
        if len == 0 {
            return false;
        }

        let random_idx = fastrand::usize(..len);
        let Some(entry) = self.entries.iter().nth(random_idx) else {
            return false;
        };
        let key = entry.key().clone();
        drop(entry);

        match self.entries.remove(&key) {
            Some((_, removed)) => {
                self.resident_bytes
                    .fetch_sub(removed.cost, Ordering::Relaxed);
                self.metrics.evictions.fetch_add(1, Ordering::Relaxed);
                debug!(key = %key.render(), "evicted");
                true
            }
            // Raced with another remover; report progress anyway.
            None => true,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn resident_bytes(&self) -> usize {
        self.resident_bytes.load(Ordering::Relaxed)
    }

    pub fn metrics(&self) -> Arc<CacheMetrics> {
        Arc::clone(&self.metrics)
    }

    pub fn stats(&self) -> CacheStats {
        self.metrics
            .snapshot(self.len(), self.resident_bytes(), self.capacity_bytes)
    }

    pub fn clear(&self) {
        self.entries.clear();
        self.resident_bytes.store(0, Ordering::Relaxed);
        info!("Entity cache cleared");
    }
}
