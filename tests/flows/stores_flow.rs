/// Store Bundle Flow Test
///
/// Runs the cached store surface the way the service layer uses it:
/// one shared engine, eight adapters, reads and writes interleaved.

use std::sync::Arc;
use std::time::Duration;

use gateplane_application::ports::{
    ApiProductStore, CredentialStore, DeveloperAppStore, KeyStore, OAuthTokenStore, RoleStore,
    UserStore,
};
use gateplane_domain::DomainError;
use gateplane_infrastructure::cache::stores::Stores;
use gateplane_infrastructure::cache::EntityCache;

#[path = "../common/mod.rs"]
mod common;
use common::{
    api_product, credential, developer, developer_app, key, oauth_token, role, user, MemoryBackend,
};

fn cached_bundle(backend: &MemoryBackend) -> Stores {
    let cache = Arc::new(EntityCache::with_ttls(
        1 << 20,
        Duration::from_secs(60),
        None,
    ));
    Stores::cached(cache, backend.stores())
}

// ============================================================================
// Shared Engine Behavior
// ============================================================================

#[tokio::test]
async fn bundle_reads_through_one_engine() {
    let backend = MemoryBackend::new();
    backend.seed_user(user("alice", "active")).await;
    backend.seed_role(role("admin")).await;
    backend.seed_product(api_product("weather")).await;
    let stores = cached_bundle(&backend);

    stores.user.get("alice").await.unwrap();
    stores.role.get("admin").await.unwrap();
    stores.api_product.get("weather").await.unwrap();
    assert_eq!(backend.read_count(), 3);

    stores.user.get("alice").await.unwrap();
    stores.role.get("admin").await.unwrap();
    stores.api_product.get("weather").await.unwrap();
    assert_eq!(backend.read_count(), 3);
}

#[tokio::test]
async fn status_change_is_visible_after_update() {
    let backend = MemoryBackend::new();
    backend.seed_user(user("alice", "active")).await;
    let stores = cached_bundle(&backend);

    assert_eq!(stores.user.get("alice").await.unwrap().status, "active");

    stores.user.update(&user("alice", "inactive")).await.unwrap();

    assert_eq!(stores.user.get("alice").await.unwrap().status, "inactive");
}

// ============================================================================
// Listing and Count Refresh
// ============================================================================

#[tokio::test]
async fn app_listings_and_counts_follow_writes() {
    let backend = MemoryBackend::new();
    backend.seed_developer(developer("dev-1", "grace@example.test")).await;
    backend.seed_app(developer_app("app-1", "forecast", "dev-1")).await;
    let stores = cached_bundle(&backend);

    assert_eq!(
        stores
            .developer_app
            .get_all_by_developer("dev-1")
            .await
            .unwrap()
            .len(),
        1
    );
    assert_eq!(
        stores
            .developer_app
            .get_count_by_developer("dev-1")
            .await
            .unwrap(),
        1
    );

    stores
        .developer_app
        .update(&developer_app("app-2", "radar", "dev-1"))
        .await
        .unwrap();

    assert_eq!(
        stores
            .developer_app
            .get_all_by_developer("dev-1")
            .await
            .unwrap()
            .len(),
        2
    );
    assert_eq!(
        stores
            .developer_app
            .get_count_by_developer("dev-1")
            .await
            .unwrap(),
        2
    );
}

#[tokio::test]
async fn credential_delete_clears_app_listing() {
    let backend = MemoryBackend::new();
    backend.seed_credential(credential("ck-1", "app-1", "weather")).await;
    let stores = cached_bundle(&backend);

    assert_eq!(stores.credential.get_by_app("app-1").await.unwrap().len(), 1);

    stores.credential.delete_by_key("ck-1").await.unwrap();

    assert!(stores.credential.get_by_app("app-1").await.unwrap().is_empty());
    assert!(matches!(
        stores.credential.get_by_key("ck-1").await,
        Err(DomainError::NotFound(_))
    ));
}

#[tokio::test]
async fn key_approval_counts_track_the_store() {
    let backend = MemoryBackend::new();
    backend.seed_key(key("ck-1", "app-1", "weather")).await;
    let stores = cached_bundle(&backend);

    assert_eq!(
        stores.key.get_count_by_api_product("weather").await.unwrap(),
        1
    );

    stores.key.delete_by_key("ck-1").await.unwrap();

    assert_eq!(
        stores.key.get_count_by_api_product("weather").await.unwrap(),
        0
    );
}

// ============================================================================
// OAuth Token Lifecycle
// ============================================================================

#[tokio::test]
async fn token_lifecycle_keeps_all_handles_consistent() {
    let backend = MemoryBackend::new();
    let stores = cached_bundle(&backend);

    stores
        .oauth_token
        .create(&oauth_token("at-1", "code-1", "rt-1"))
        .await
        .unwrap();

    assert_eq!(
        stores.oauth_token.get_by_access("at-1").await.unwrap().scope,
        "read write"
    );
    assert_eq!(
        stores.oauth_token.get_by_code("code-1").await.unwrap().access,
        "at-1"
    );

    stores.oauth_token.delete_by_refresh("rt-1").await.unwrap();

    assert!(stores.oauth_token.get_by_access("at-1").await.is_err());
    assert!(stores.oauth_token.get_by_code("code-1").await.is_err());
}
