use std::sync::Arc;

use async_trait::async_trait;
use gateplane_application::ports::ApiProductStore;
use gateplane_domain::{ApiProduct, DomainError};

use super::super::key::EntityKind;
use super::super::storage::EntityCache;
use super::ALL_ITEMS;

const KIND: EntityKind = EntityKind::ApiProduct;

/// Read-through cache in front of an [`ApiProductStore`].
pub struct CachedApiProductStore {
    cache: Arc<EntityCache>,
    inner: Arc<dyn ApiProductStore>,
}

impl CachedApiProductStore {
    pub fn new(cache: Arc<EntityCache>, inner: Arc<dyn ApiProductStore>) -> Self {
        Self { cache, inner }
    }

    fn invalidate_projections(&self, name: &str) {
        self.cache.invalidate(KIND, name);
        self.cache.invalidate(KIND, ALL_ITEMS);
    }
}

#[async_trait]
impl ApiProductStore for CachedApiProductStore {
    async fn get_all(&self) -> Result<Vec<ApiProduct>, DomainError> {
        self.cache
            .fetch_or_load(KIND, ALL_ITEMS, || self.inner.get_all())
            .await
    }

    async fn get(&self, name: &str) -> Result<ApiProduct, DomainError> {
        self.cache
            .fetch_or_load(KIND, name, || self.inner.get(name))
            .await
    }

    async fn update(&self, product: &ApiProduct) -> Result<(), DomainError> {
        self.invalidate_projections(&product.name);
        let result = self.inner.update(product).await;
        if result.is_ok() {
            self.invalidate_projections(&product.name);
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
