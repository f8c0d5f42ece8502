use async_trait::async_trait;
use gateplane_domain::{DomainError, Key};

/// Store interface for apikeys.
#[async_trait]
pub trait KeyStore: Send + Sync {
    /// Retrieves all keys.
    async fn get_all(&self) -> Result<Vec<Key>, DomainError>;

    /// Retrieves one key by consumer key.
    async fn get_by_key(&self, consumer_key: &str) -> Result<Key, DomainError>;

    /// Retrieves all keys of one developer app.
    async fn get_by_app(&self, app_id: &str) -> Result<Vec<Key>, DomainError>;

    /// Counts how many keys have an api product assigned.
    async fn get_count_by_api_product(&self, product_name: &str) -> Result<i64, DomainError>;

    /// UPSERTs a key.
    async fn update(&self, key: &Key) -> Result<(), DomainError>;

    /// Deletes a key by consumer key.
    async fn delete_by_key(&self, consumer_key: &str) -> Result<(), DomainError>;
}
