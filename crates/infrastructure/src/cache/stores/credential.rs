use std::sync::Arc;

use async_trait::async_trait;
use gateplane_application::ports::CredentialStore;
use gateplane_domain::{Credential, DomainError};

use super::super::key::EntityKind;
use super::super::storage::EntityCache;

const KIND: EntityKind = EntityKind::Credential;

fn by_app(app_id: &str) -> String {
    format!("by-app:{app_id}")
}

/// Read-through cache in front of a [`CredentialStore`].
pub struct CachedCredentialStore {
    cache: Arc<EntityCache>,
    inner: Arc<dyn CredentialStore>,
}

impl CachedCredentialStore {
    pub fn new(cache: Arc<EntityCache>, inner: Arc<dyn CredentialStore>) -> Self {
        Self { cache, inner }
    }

    fn invalidate_projections(&self, credential: &Credential) {
        self.cache.invalidate(KIND, &credential.consumer_key);
        self.cache.invalidate(KIND, &by_app(&credential.app_id));
    }
}

#[async_trait]
impl CredentialStore for CachedCredentialStore {
    async fn get_by_key(&self, consumer_key: &str) -> Result<Credential, DomainError> {
        self.cache
            .fetch_or_load(KIND, consumer_key, || self.inner.get_by_key(consumer_key))
            .await
    }

    async fn get_by_app(&self, app_id: &str) -> Result<Vec<Credential>, DomainError> {
        self.cache
            .fetch_or_load(KIND, &by_app(app_id), || self.inner.get_by_app(app_id))
            .await
    }

    async fn update(&self, credential: &Credential) -> Result<(), DomainError> {
        self.invalidate_projections(credential);
        let result = self.inner.update(credential).await;
        if result.is_ok() {
            self.invalidate_projections(credential);
        }
        result
    }

    async fn delete_by_key(&self, consumer_key: &str) -> Result<(), DomainError> {
        let resolved = self.inner.get_by_key(consumer_key).await.ok();
        match &resolved {
            Some(credential) => self.invalidate_projections(credential),
            None => self.cache.invalidate(KIND, consumer_key),
        }
        let result = self.inner.delete_by_key(consumer_key).await;
        if result.is_ok() {
            match &resolved {
                Some(credential) => self.invalidate_projections(credential),
                None => self.cache.invalidate(KIND, consumer_key),
            }
        }
        result
    }
}
