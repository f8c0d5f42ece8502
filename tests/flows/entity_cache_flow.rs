/// Entity Cache Flow Test
///
/// Exercises the engine end to end:
/// TOML config -> EntityCache -> miss -> load -> hit -> stats

use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use gateplane_domain::{CacheConfig, DomainError};
use gateplane_infrastructure::cache::{EntityCache, EntityKind};

#[path = "../common/mod.rs"]
mod common;
use common::user;

// ============================================================================
// Config-Driven Construction
// ============================================================================

#[tokio::test]
async fn config_driven_round_trip() {
    let config = CacheConfig::from_toml(
        r#"
        capacity_bytes = 1048576
        ttl_seconds = 60
        negative_ttl_seconds = 0
        "#,
    )
    .unwrap();
    let cache = EntityCache::new(&config).unwrap();

    let loads = AtomicU32::new(0);
    let alice = user("alice", "active");

    for _ in 0..3 {
        let got: gateplane_domain::User = cache
            .fetch_or_load(EntityKind::User, "alice", || async {
                loads.fetch_add(1, Ordering::SeqCst);
                Ok(alice.clone())
            })
            .await
            .unwrap();
        assert_eq!(got.name, "alice");
        assert_eq!(got.status, "active");
    }

    assert_eq!(loads.load(Ordering::SeqCst), 1);

    let stats = cache.stats();
    assert_eq!(stats.entries, 1);
    assert_eq!(stats.insertions, 1);
    assert!(stats.resident_bytes > 0);
    assert!(stats.hit_rate > 0.0);
}

#[tokio::test]
async fn zero_capacity_config_is_rejected() {
    let config = CacheConfig::from_toml("capacity_bytes = 0").unwrap();
    assert!(EntityCache::new(&config).is_err());
}

// ============================================================================
// Negative Caching Flow
// ============================================================================

#[tokio::test]
async fn negative_entries_absorb_repeated_misses() {
    let config = CacheConfig::from_toml(
        r#"
        capacity_bytes = 1048576
        ttl_seconds = 60
        negative_ttl_seconds = 60
        "#,
    )
    .unwrap();
    let cache = EntityCache::new(&config).unwrap();

    let loads = AtomicU32::new(0);
    for _ in 0..3 {
        let result: Result<gateplane_domain::User, _> = cache
            .fetch_or_load(EntityKind::User, "ghost", || async {
                loads.fetch_add(1, Ordering::SeqCst);
                Err(DomainError::NotFound("user 'ghost' not found".to_string()))
            })
            .await;
        assert!(matches!(result, Err(DomainError::NotFound(_))));
    }

    assert_eq!(loads.load(Ordering::SeqCst), 1);
    assert_eq!(cache.stats().negative_hits, 2);
}

// ============================================================================
// Expiry Flow
// ============================================================================

#[tokio::test]
async fn expired_entries_are_reloaded() {
    let cache = EntityCache::with_ttls(1 << 20, Duration::from_millis(20), None);

    let loads = AtomicU32::new(0);
    let load = || async {
        loads.fetch_add(1, Ordering::SeqCst);
        Ok(user("alice", "active"))
    };

    let _: gateplane_domain::User = cache
        .fetch_or_load(EntityKind::User, "alice", load)
        .await
        .unwrap();

    tokio::time::sleep(Duration::from_millis(40)).await;

    let _: gateplane_domain::User = cache
        .fetch_or_load(EntityKind::User, "alice", || async {
            loads.fetch_add(1, Ordering::SeqCst);
            Ok(user("alice", "active"))
        })
        .await
        .unwrap();

    assert_eq!(loads.load(Ordering::SeqCst), 2);
    assert_eq!(cache.stats().expirations, 1);
}

// ============================================================================
// Per-Kind Accounting
// ============================================================================

#[tokio::test]
async fn stats_break_down_by_kind() {
    let cache = EntityCache::with_ttls(1 << 20, Duration::from_secs(60), None);

    for item in ["a", "b"] {
        let _: u64 = cache
            .fetch_or_load(EntityKind::ApiProduct, item, || async { Ok(7u64) })
            .await
            .unwrap();
    }
    let _: u64 = cache
        .fetch_or_load(EntityKind::ApiProduct, "a", || async { Ok(7u64) })
        .await
        .unwrap();

    let stats = cache.stats();
    let (_, hits, misses) = stats
        .per_kind
        .iter()
        .find(|(kind, _, _)| *kind == "api_product")
        .copied()
        .unwrap();
    assert_eq!(hits, 1);
    assert_eq!(misses, 2);
}
