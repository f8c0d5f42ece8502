use std::sync::Arc;

use async_trait::async_trait;
use gateplane_application::ports::UserStore;
use gateplane_domain::{DomainError, User};

use super::super::key::EntityKind;
use super::super::storage::EntityCache;
use super::ALL_ITEMS;

const KIND: EntityKind = EntityKind::User;

/// Read-through cache in front of a [`UserStore`].
pub struct CachedUserStore {
    cache: Arc<EntityCache>,
    inner: Arc<dyn UserStore>,
}

impl CachedUserStore {
    pub fn new(cache: Arc<EntityCache>, inner: Arc<dyn UserStore>) -> Self {
        Self { cache, inner }
    }

    fn invalidate_projections(&self, name: &str) {
        self.cache.invalidate(KIND, name);
        self.cache.invalidate(KIND, ALL_ITEMS);
    }
}

#[async_trait]
impl UserStore for CachedUserStore {
    async fn get_all(&self) -> Result<Vec<User>, DomainError> {
        self.cache
            .fetch_or_load(KIND, ALL_ITEMS, || self.inner.get_all())
            .await
    }

    async fn get(&self, name: &str) -> Result<User, DomainError> {
        self.cache
            .fetch_or_load(KIND, name, || self.inner.get(name))
            .await
    }

    async fn update(&self, user: &User) -> Result<(), DomainError> {
        self.invalidate_projections(&user.name);
        let result = self.inner.update(user).await;
        if result.is_ok() {
            self.invalidate_projections(&user.name);
        }
        result
    }

    async fn delete(&self, name: &str) -> Result<(), DomainError> {
        self.invalidate_projections(name);
        let result = self.inner.delete(name).await;
        if result.is_ok() {
            self.invalidate_projections(name);
        }
        result
    }
}
