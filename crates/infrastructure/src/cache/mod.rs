//! Generic read-through entity cache.
//!
//! One bounded, sharded store caches every entity kind of the plane behind
//! a single engine; per-kind adapters in [`stores`] translate port calls
//! into `fetch_or_load` / `invalidate` pairs.

pub mod codec;
pub mod key;
pub mod metrics;
pub mod storage;
pub mod stores;

pub use key::{CacheKey, EntityKind};
pub use metrics::{CacheMetrics, CacheStats};
pub use storage::EntityCache;
