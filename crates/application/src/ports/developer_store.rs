use async_trait::async_trait;
use gateplane_domain::{Developer, DomainError};

/// Store interface for developers.
///
/// Developers are reachable by internal id and by email address; both keys
/// resolve to the same entity and both must be honored by any cache sitting
/// in front of an implementation.
#[async_trait]
pub trait DeveloperStore: Send + Sync {
    /// Retrieves all developers.
    async fn get_all(&self) -> Result<Vec<Developer>, DomainError>;

    /// Retrieves a developer by email address.
    ///
    /// # Errors
    ///
    /// * `DomainError::NotFound` - If no developer has this email
    /// * `DomainError::Database` - If a database error occurs
    async fn get_by_email(&self, email: &str) -> Result<Developer, DomainError>;

    /// Retrieves a developer by internal id.
    async fn get_by_id(&self, developer_id: &str) -> Result<Developer, DomainError>;

    /// UPSERTs a developer.
    async fn update(&self, developer: &Developer) -> Result<(), DomainError>;

    /// Deletes a developer by internal id.
    async fn delete_by_id(&self, developer_id: &str) -> Result<(), DomainError>;
}
