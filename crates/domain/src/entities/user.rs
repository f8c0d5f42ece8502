use serde::{Deserialize, Serialize};

use super::STATUS_ACTIVE;

/// An admin user of the configuration plane.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// User name (not changeable)
    pub name: String,

    pub display_name: String,

    /// Password hash; cleared when redacted for output
    #[serde(default)]
    pub password: String,

    /// Status of this user ("active" to allow login)
    pub status: String,

    /// Names of roles granted to this user
    pub roles: Vec<String>,

    pub created_at: i64,
    pub created_by: String,
    pub lastmodified_at: i64,
    pub lastmodified_by: String,
}

impl User {
    pub fn is_active(&self) -> bool {
        self.status == STATUS_ACTIVE
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}
