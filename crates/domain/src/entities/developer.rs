use serde::{Deserialize, Serialize};

use super::attribute::Attributes;
use super::STATUS_ACTIVE;

/// A developer registered with the gateway.
///
/// Developers are addressable by two natural keys: the internal
/// `developer_id` and the `email` address. Any code invalidating cached
/// copies must cover both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Developer {
    /// Internal id, assigned at creation (not changeable)
    pub developer_id: String,

    /// Email address, unique across the plane
    pub email: String,

    pub first_name: String,
    pub last_name: String,

    /// Names of apps owned by this developer
    pub apps: Vec<String>,

    #[serde(default)]
    pub attributes: Attributes,

    /// Status of this developer ("active" to allow access)
    pub status: String,

    pub organization_name: String,

    /// Created at timestamp in epoch milliseconds
    pub created_at: i64,
    pub created_by: String,

    /// Last modified at timestamp in epoch milliseconds
    pub lastmodified_at: i64,
    pub lastmodified_by: String,
}

impl Developer {
    pub fn is_active(&self) -> bool {
        self.status == STATUS_ACTIVE
    }

    pub fn activate(&mut self) {
        self.status = STATUS_ACTIVE.to_string();
    }
}
