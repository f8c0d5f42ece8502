use std::sync::Arc;

use async_trait::async_trait;
use gateplane_application::ports::DeveloperAppStore;
use gateplane_domain::{DeveloperApp, DomainError};

use super::super::key::EntityKind;
use super::super::storage::EntityCache;
use super::ALL_ITEMS;

const KIND: EntityKind = EntityKind::DeveloperApp;

fn by_developer(developer_id: &str) -> String {
    format!("by-developer:{developer_id}")
}

fn count_by_developer(developer_id: &str) -> String {
    format!("count:{developer_id}")
}

/// Read-through cache in front of a [`DeveloperAppStore`].
pub struct CachedDeveloperAppStore {
    cache: Arc<EntityCache>,
    inner: Arc<dyn DeveloperAppStore>,
}

impl CachedDeveloperAppStore {
    pub fn new(cache: Arc<EntityCache>, inner: Arc<dyn DeveloperAppStore>) -> Self {
        Self { cache, inner }
    }

    /// Key projections of one app: id, name, the owning developer's
    /// scoped collection and count, and the whole-collection entry.
    fn invalidate_projections(&self, app: &DeveloperApp) {
        self.cache.invalidate(KIND, &app.app_id);
        self.cache.invalidate(KIND, &app.name);
        self.cache.invalidate(KIND, &by_developer(&app.developer_id));
        self.cache
            .invalidate(KIND, &count_by_developer(&app.developer_id));
        self.cache.invalidate(KIND, ALL_ITEMS);
    }
}

#[async_trait]
impl DeveloperAppStore for CachedDeveloperAppStore {
    async fn get_all(&self) -> Result<Vec<DeveloperApp>, DomainError> {
        self.cache
            .fetch_or_load(KIND, ALL_ITEMS, || self.inner.get_all())
            .await
    }

    async fn get_all_by_developer(
        &self,
        developer_id: &str,
    ) -> Result<Vec<DeveloperApp>, DomainError> {
        self.cache
            .fetch_or_load(KIND, &by_developer(developer_id), || {
                self.inner.get_all_by_developer(developer_id)
            })
            .await
    }

    async fn get_by_name(&self, name: &str) -> Result<DeveloperApp, DomainError> {
        self.cache
            .fetch_or_load(KIND, name, || self.inner.get_by_name(name))
            .await
    }

    async fn get_by_id(&self, app_id: &str) -> Result<DeveloperApp, DomainError> {
        self.cache
            .fetch_or_load(KIND, app_id, || self.inner.get_by_id(app_id))
            .await
    }

    async fn get_count_by_developer(&self, developer_id: &str) -> Result<i64, DomainError> {
        self.cache
            .fetch_or_load(KIND, &count_by_developer(developer_id), || {
                self.inner.get_count_by_developer(developer_id)
            })
            .await
    }

    async fn update(&self, app: &DeveloperApp) -> Result<(), DomainError> {
        self.invalidate_projections(app);
        let result = self.inner.update(app).await;
        if result.is_ok() {
            self.invalidate_projections(app);
        }
        result
    }

    async fn delete_by_id(&self, app_id: &str) -> Result<(), DomainError> {
        let resolved = self.inner.get_by_id(app_id).await.ok();
        match &resolved {
            Some(app) => self.invalidate_projections(app),
            None => {
                self.cache.invalidate(KIND, app_id);
                self.cache.invalidate(KIND, ALL_ITEMS);
            }
        }
        let result = self.inner.delete_by_id(app_id).await;
        if result.is_ok() {
            match &resolved {
                Some(app) => self.invalidate_projections(app),
                None => {
                    self.cache.invalidate(KIND, app_id);
                    self.cache.invalidate(KIND, ALL_ITEMS);
                }
            }
        }
        result
    }
}
