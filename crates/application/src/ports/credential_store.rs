use async_trait::async_trait;
use gateplane_domain::{Credential, DomainError};

/// Store interface for developer app credentials.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Retrieves one credential by consumer key.
    async fn get_by_key(&self, consumer_key: &str) -> Result<Credential, DomainError>;

    /// Retrieves all credentials of one developer app.
    async fn get_by_app(&self, app_id: &str) -> Result<Vec<Credential>, DomainError>;

    /// UPSERTs a credential.
    async fn update(&self, credential: &Credential) -> Result<(), DomainError>;

    /// Deletes a credential by consumer key.
    async fn delete_by_key(&self, consumer_key: &str) -> Result<(), DomainError>;
}
