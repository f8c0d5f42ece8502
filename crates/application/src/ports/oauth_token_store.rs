use async_trait::async_trait;
use gateplane_domain::{DomainError, OAuthToken};

/// Store interface for issued OAuth2 tokens.
///
/// The same token row is addressable by access token, authorization code
/// and refresh token.
#[async_trait]
pub trait OAuthTokenStore: Send + Sync {
    async fn get_by_access(&self, access: &str) -> Result<OAuthToken, DomainError>;

    async fn get_by_code(&self, code: &str) -> Result<OAuthToken, DomainError>;

    async fn get_by_refresh(&self, refresh: &str) -> Result<OAuthToken, DomainError>;

    /// Stores a newly issued token.
    async fn create(&self, token: &OAuthToken) -> Result<(), DomainError>;

    async fn delete_by_access(&self, access: &str) -> Result<(), DomainError>;

    async fn delete_by_code(&self, code: &str) -> Result<(), DomainError>;

    async fn delete_by_refresh(&self, refresh: &str) -> Result<(), DomainError>;
}
