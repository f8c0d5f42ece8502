use std::sync::Arc;

use async_trait::async_trait;
use gateplane_application::ports::DeveloperStore;
use gateplane_domain::{Developer, DomainError};

use super::super::key::EntityKind;
use super::super::storage::EntityCache;
use super::ALL_ITEMS;

const KIND: EntityKind = EntityKind::Developer;

/// Read-through cache in front of a [`DeveloperStore`].
///
/// Developers are cached under both natural keys (internal id and email)
/// plus the whole-collection entry; all three projections are invalidated
/// together on every write.
pub struct CachedDeveloperStore {
    cache: Arc<EntityCache>,
    inner: Arc<dyn DeveloperStore>,
}

impl CachedDeveloperStore {
    pub fn new(cache: Arc<EntityCache>, inner: Arc<dyn DeveloperStore>) -> Self {
        Self { cache, inner }
    }

    fn invalidate_projections(&self, developer: &Developer) {
        self.cache.invalidate(KIND, &developer.developer_id);
        self.cache.invalidate(KIND, &developer.email);
        self.cache.invalidate(KIND, ALL_ITEMS);
    }
}

#[async_trait]
impl DeveloperStore for CachedDeveloperStore {
    async fn get_all(&self) -> Result<Vec<Developer>, DomainError> {
        self.cache
            .fetch_or_load(KIND, ALL_ITEMS, || self.inner.get_all())
            .await
    }

    async fn get_by_email(&self, email: &str) -> Result<Developer, DomainError> {
        self.cache
            .fetch_or_load(KIND, email, || self.inner.get_by_email(email))
            .await
    }

    async fn get_by_id(&self, developer_id: &str) -> Result<Developer, DomainError> {
        self.cache
            .fetch_or_load(KIND, developer_id, || self.inner.get_by_id(developer_id))
            .await
    }

    async fn update(&self, developer: &Developer) -> Result<(), DomainError> {
        self.invalidate_projections(developer);
        let result = self.inner.update(developer).await;
        if result.is_ok() {
            // Re-invalidate: a reader racing between the first invalidation
            // and the store write may have repopulated the old value.
            self.invalidate_projections(developer);
        }
        result
    }

    async fn delete_by_id(&self, developer_id: &str) -> Result<(), DomainError> {
        // Resolve the entity first so the email projection is covered too.
        let resolved = self.inner.get_by_id(developer_id).await.ok();
        match &resolved {
            Some(developer) => self.invalidate_projections(developer),
            None => {
                self.cache.invalidate(KIND, developer_id);
                self.cache.invalidate(KIND, ALL_ITEMS);
            }
        }
        let result = self.inner.delete_by_id(developer_id).await;
        if result.is_ok() {
            // Re-invalidate the same projection set: a reader racing the
            // delete may have repopulated any of them.
            match &resolved {
                Some(developer) => self.invalidate_projections(developer),
                None => {
                    self.cache.invalidate(KIND, developer_id);
                    self.cache.invalidate(KIND, ALL_ITEMS);
                }
            }
        }
        result
    }
}
