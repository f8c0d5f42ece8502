use async_trait::async_trait;
use gateplane_domain::{DomainError, User};

/// Store interface for admin users.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn get_all(&self) -> Result<Vec<User>, DomainError>;

    async fn get(&self, name: &str) -> Result<User, DomainError>;

    async fn update(&self, user: &User) -> Result<(), DomainError>;

    async fn delete(&self, name: &str) -> Result<(), DomainError>;
}
