//! Configuration structures for the entity cache.
//!
//! - `cache`: capacity and TTL settings for the read-through cache
//! - `errors`: configuration validation errors

pub mod cache;
pub mod errors;

pub use cache::CacheConfig;
pub use errors::ConfigError;
