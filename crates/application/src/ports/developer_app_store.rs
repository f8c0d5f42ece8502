use async_trait::async_trait;
use gateplane_domain::{DeveloperApp, DomainError};

/// Store interface for developer apps.
#[async_trait]
pub trait DeveloperAppStore: Send + Sync {
    /// Retrieves all developer apps.
    async fn get_all(&self) -> Result<Vec<DeveloperApp>, DomainError>;

    /// Retrieves all apps owned by one developer.
    async fn get_all_by_developer(
        &self,
        developer_id: &str,
    ) -> Result<Vec<DeveloperApp>, DomainError>;

    /// Retrieves an app by name.
    async fn get_by_name(&self, name: &str) -> Result<DeveloperApp, DomainError>;

    /// Retrieves an app by internal id.
    async fn get_by_id(&self, app_id: &str) -> Result<DeveloperApp, DomainError>;

    /// Counts the apps owned by one developer.
    async fn get_count_by_developer(&self, developer_id: &str) -> Result<i64, DomainError>;

    /// UPSERTs a developer app.
    async fn update(&self, app: &DeveloperApp) -> Result<(), DomainError>;

    /// Deletes an app by internal id.
    async fn delete_by_id(&self, app_id: &str) -> Result<(), DomainError>;
}
