use std::sync::Arc;

use async_trait::async_trait;
use gateplane_application::ports::RoleStore;
use gateplane_domain::{DomainError, Role};

use super::super::key::EntityKind;
use super::super::storage::EntityCache;
use super::ALL_ITEMS;

const KIND: EntityKind = EntityKind::Role;

/// Read-through cache in front of a [`RoleStore`].
pub struct CachedRoleStore {
    cache: Arc<EntityCache>,
    inner: Arc<dyn RoleStore>,
}

impl CachedRoleStore {
    pub fn new(cache: Arc<EntityCache>, inner: Arc<dyn RoleStore>) -> Self {
        Self { cache, inner }
    }

    fn invalidate_projections(&self, name: &str) {
        self.cache.invalidate(KIND, name);
        self.cache.invalidate(KIND, ALL_ITEMS);
    }
}

#[async_trait]
impl RoleStore for CachedRoleStore {
    async fn get_all(&self) -> Result<Vec<Role>, DomainError> {
        self.cache
            .fetch_or_load(KIND, ALL_ITEMS, || self.inner.get_all())
            .await
    }

    async fn get(&self, name: &str) -> Result<Role, DomainError> {
        self.cache
            .fetch_or_load(KIND, name, || self.inner.get(name))
            .await
    }

    async fn update(&self, role: &Role) -> Result<(), DomainError> {
        self.invalidate_projections(&role.name);
        let result = self.inner.update(role).await;
        if result.is_ok() {
            self.invalidate_projections(&role.name);
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
