use std::sync::Arc;

use async_trait::async_trait;
use gateplane_application::ports::KeyStore;
use gateplane_domain::{DomainError, Key};

use super::super::key::EntityKind;
use super::super::storage::EntityCache;
use super::ALL_ITEMS;

const KIND: EntityKind = EntityKind::Key;

fn by_app(app_id: &str) -> String {
    format!("by-app:{app_id}")
}

fn count_by_product(product_name: &str) -> String {
    format!("count:{product_name}")
}

/// Read-through cache in front of a [`KeyStore`].
///
/// Keys have the widest projection set of the plane: the consumer key
/// itself, the owning app's scoped collection, one count entry per
/// assigned api product, and the whole-collection entry.
pub struct CachedKeyStore {
    cache: Arc<EntityCache>,
    inner: Arc<dyn KeyStore>,
}

impl CachedKeyStore {
    pub fn new(cache: Arc<EntityCache>, inner: Arc<dyn KeyStore>) -> Self {
        Self { cache, inner }
    }

    fn invalidate_projections(&self, key: &Key) {
        self.cache.invalidate(KIND, &key.consumer_key);
        self.cache.invalidate(KIND, &by_app(&key.app_id));
        for product in key.product_names() {
            self.cache.invalidate(KIND, &count_by_product(product));
        }
        self.cache.invalidate(KIND, ALL_ITEMS);
    }
}

#[async_trait]
impl KeyStore for CachedKeyStore {
    async fn get_all(&self) -> Result<Vec<Key>, DomainError> {
        self.cache
            .fetch_or_load(KIND, ALL_ITEMS, || self.inner.get_all())
            .await
    }

    async fn get_by_key(&self, consumer_key: &str) -> Result<Key, DomainError> {
        self.cache
            .fetch_or_load(KIND, consumer_key, || self.inner.get_by_key(consumer_key))
            .await
    }

    async fn get_by_app(&self, app_id: &str) -> Result<Vec<Key>, DomainError> {
        self.cache
            .fetch_or_load(KIND, &by_app(app_id), || self.inner.get_by_app(app_id))
            .await
    }

    async fn get_count_by_api_product(&self, product_name: &str) -> Result<i64, DomainError> {
        self.cache
            .fetch_or_load(KIND, &count_by_product(product_name), || {
                self.inner.get_count_by_api_product(product_name)
            })
            .await
    }

    async fn update(&self, key: &Key) -> Result<(), DomainError> {
        self.invalidate_projections(key);
        let result = self.inner.update(key).await;
        if result.is_ok() {
            self.invalidate_projections(key);
        }
        result
    }

    async fn delete_by_key(&self, consumer_key: &str) -> Result<(), DomainError> {
        let resolved = self.inner.get_by_key(consumer_key).await.ok();
        match &resolved {
            Some(key) => self.invalidate_projections(key),
            None => {
                self.cache.invalidate(KIND, consumer_key);
                self.cache.invalidate(KIND, ALL_ITEMS);
            }
        }
        let result = self.inner.delete_by_key(consumer_key).await;
        if result.is_ok() {
            match &resolved {
                Some(key) => self.invalidate_projections(key),
                None => {
                    self.cache.invalidate(KIND, consumer_key);
                    self.cache.invalidate(KIND, ALL_ITEMS);
                }
            }
        }
        result
    }
}
