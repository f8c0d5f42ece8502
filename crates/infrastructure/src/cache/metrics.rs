use std::sync::atomic::{AtomicU64, Ordering};

use super::key::EntityKind;

/// Cache performance counters.
///
/// Per-kind hit/miss counters are fixed arrays indexed by [`EntityKind`];
/// everything is a relaxed atomic, updated from arbitrarily many callers.
#[derive(Default)]
pub struct CacheMetrics {
    hits: [AtomicU64; EntityKind::COUNT],
    misses: [AtomicU64; EntityKind::COUNT],

    pub insertions: AtomicU64,
    pub evictions: AtomicU64,
    pub expirations: AtomicU64,
    pub invalidations: AtomicU64,
    pub negative_hits: AtomicU64,
}

impl CacheMetrics {
    pub fn record_hit(&self, kind: EntityKind) {
        self.hits[kind.index()].fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_miss(&self, kind: EntityKind) {
        self.misses[kind.index()].fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_negative_hit(&self, kind: EntityKind) {
        self.negative_hits.fetch_add(1, Ordering::Relaxed);
        self.record_hit(kind);
    }

    pub fn hits(&self, kind: EntityKind) -> u64 {
        self.hits[kind.index()].load(Ordering::Relaxed)
    }

    pub fn misses(&self, kind: EntityKind) -> u64 {
        self.misses[kind.index()].load(Ordering::Relaxed)
    }

    pub fn total_hits(&self) -> u64 {
        self.hits.iter().map(|c| c.load(Ordering::Relaxed)).sum()
    }

    pub fn total_misses(&self) -> u64 {
        self.misses.iter().map(|c| c.load(Ordering::Relaxed)).sum()
    }

    /// Hit ratio in percent over the lifetime of the engine.
    pub fn hit_rate(&self) -> f64 {
        let hits = self.total_hits() as f64;
        let total = hits + self.total_misses() as f64;

        if total > 0.0 {
            (hits / total) * 100.0
        } else {
            0.0
        }
    }
}

/// Point-in-time view of the engine, for external exposure.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheStats {
    pub entries: usize,
    pub resident_bytes: usize,
    pub capacity_bytes: usize,
    pub hit_rate: f64,
    pub insertions: u64,
    pub evictions: u64,
    pub expirations: u64,
    pub invalidations: u64,
    pub negative_hits: u64,
    /// `(tag, hits, misses)` per entity kind
    pub per_kind: Vec<(&'static str, u64, u64)>,
}

impl CacheMetrics {
    pub(crate) fn snapshot(
        &self,
        entries: usize,
        resident_bytes: usize,
        capacity_bytes: usize,
    ) -> CacheStats {
        CacheStats {
            entries,
            resident_bytes,
            capacity_bytes,
            hit_rate: self.hit_rate(),
            insertions: self.insertions.load(Ordering::Relaxed),
            evictions: self.evictions.load(Ordering::Relaxed),
            expirations: self.expirations.load(Ordering::Relaxed),
            invalidations: self.invalidations.load(Ordering::Relaxed),
            negative_hits: self.negative_hits.load(Ordering::Relaxed),
            per_kind: EntityKind::ALL
                .iter()
                .map(|kind| (kind.as_str(), self.hits(*kind), self.misses(*kind)))
                .collect(),
        }
    }
}
