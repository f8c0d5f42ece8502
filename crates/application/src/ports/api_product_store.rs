use async_trait::async_trait;
use gateplane_domain::{ApiProduct, DomainError};

/// Store interface for api products.
#[async_trait]
pub trait ApiProductStore: Send + Sync {
    async fn get_all(&self) -> Result<Vec<ApiProduct>, DomainError>;

    async fn get(&self, name: &str) -> Result<ApiProduct, DomainError>;

    async fn update(&self, product: &ApiProduct) -> Result<(), DomainError>;

    async fn delete(&self, name: &str) -> Result<(), DomainError>;
}
