use std::sync::Arc;

use async_trait::async_trait;
use gateplane_application::ports::OAuthTokenStore;
use gateplane_domain::{DomainError, OAuthToken};

use super::super::key::EntityKind;
use super::super::storage::EntityCache;

const KIND: EntityKind = EntityKind::OAuthToken;

/// Read-through cache in front of an [`OAuthTokenStore`].
///
/// One token row is cached under up to three handles (access token,
/// authorization code, refresh token); removing a token by any one handle
/// resolves the row first so the other two handles are invalidated too.
pub struct CachedOAuthTokenStore {
    cache: Arc<EntityCache>,
    inner: Arc<dyn OAuthTokenStore>,
}

impl CachedOAuthTokenStore {
    pub fn new(cache: Arc<EntityCache>, inner: Arc<dyn OAuthTokenStore>) -> Self {
        Self { cache, inner }
    }

    fn invalidate_projections(&self, token: &OAuthToken) {
        if !token.access.is_empty() {
            self.cache.invalidate(KIND, &token.access);
        }
        if !token.code.is_empty() {
            self.cache.invalidate(KIND, &token.code);
        }
        if !token.refresh.is_empty() {
            self.cache.invalidate(KIND, &token.refresh);
        }
    }

    async fn delete_with<D, DF, L, LF>(&self, handle: &str, lookup: L, delete: D) -> Result<(), DomainError>
    where
        L: FnOnce() -> LF,
        LF: std::future::Future<Output = Result<OAuthToken, DomainError>>,
        D: FnOnce() -> DF,
        DF: std::future::Future<Output = Result<(), DomainError>>,
    {
        let resolved = lookup().await.ok();
        match &resolved {
            Some(token) => self.invalidate_projections(token),
            None => self.cache.invalidate(KIND, handle),
        }
        let result = delete().await;
        if result.is_ok() {
            // Re-invalidate every handle: a reader racing the delete may
            // have repopulated any of them.
            match &resolved {
                Some(token) => self.invalidate_projections(token),
                None => self.cache.invalidate(KIND, handle),
            }
        }
        result
    }
}

#[async_trait]
impl OAuthTokenStore for CachedOAuthTokenStore {
    async fn get_by_access(&self, access: &str) -> Result<OAuthToken, DomainError> {
        self.cache
            .fetch_or_load(KIND, access, || self.inner.get_by_access(access))
            .await
    }

    async fn get_by_code(&self, code: &str) -> Result<OAuthToken, DomainError> {
        self.cache
            .fetch_or_load(KIND, code, || self.inner.get_by_code(code))
            .await
    }

    async fn get_by_refresh(&self, refresh: &str) -> Result<OAuthToken, DomainError> {
        self.cache
            .fetch_or_load(KIND, refresh, || self.inner.get_by_refresh(refresh))
            .await
    }

    async fn create(&self, token: &OAuthToken) -> Result<(), DomainError> {
        // A fresh token may still shadow negatively cached handles.
        self.invalidate_projections(token);
        self.inner.create(token).await
    }

    async fn delete_by_access(&self, access: &str) -> Result<(), DomainError> {
        self.delete_with(
            access,
            || self.inner.get_by_access(access),
            || self.inner.delete_by_access(access),
        )
        .await
    }

    async fn delete_by_code(&self, code: &str) -> Result<(), DomainError> {
        self.delete_with(
            code,
            || self.inner.get_by_code(code),
            || self.inner.delete_by_code(code),
        )
        .await
    }

    async fn delete_by_refresh(&self, refresh: &str) -> Result<(), DomainError> {
        self.delete_with(
            refresh,
            || self.inner.get_by_refresh(refresh),
            || self.inner.delete_by_refresh(refresh),
        )
        .await
    }
}
