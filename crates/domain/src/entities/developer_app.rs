use serde::{Deserialize, Serialize};

use super::attribute::Attributes;

/// An application registered by a developer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeveloperApp {
    /// Internal app id, assigned at creation (not changeable)
    pub app_id: String,

    /// App name, unique within the plane
    pub name: String,

    pub display_name: String,

    /// Id of the developer owning this app
    pub developer_id: String,

    /// OAuth2 redirect target for this app
    pub callback_url: String,

    #[serde(default)]
    pub attributes: Attributes,

    /// Status of this app ("active" to allow access)
    pub status: String,

    pub organization_name: String,

    pub created_at: i64,
    pub created_by: String,
    pub lastmodified_at: i64,
    pub lastmodified_by: String,
}

impl DeveloperApp {
    pub fn is_active(&self) -> bool {
        self.status == super::STATUS_ACTIVE
    }
}
