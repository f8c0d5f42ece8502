//! Gateplane Infrastructure Layer
//!
//! Read-through entity cache and the cached store adapters wrapping the
//! persistence ports.
pub mod cache;

pub use cache::stores::Stores;
pub use cache::{CacheKey, CacheStats, EntityCache, EntityKind};
