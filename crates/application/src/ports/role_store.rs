use async_trait::async_trait;
use gateplane_domain::{DomainError, Role};

/// Store interface for admin roles.
#[async_trait]
pub trait RoleStore: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Role>, DomainError>;

    async fn get(&self, name: &str) -> Result<Role, DomainError>;

    async fn update(&self, role: &Role) -> Result<(), DomainError>;

    async fn delete(&self, name: &str) -> Result<(), DomainError>;
}
