use serde::{Deserialize, Serialize};

use super::attribute::Attributes;

/// An API product bundles routes and scopes into a subscribable unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiProduct {
    /// Product name, unique within the plane (not changeable)
    pub name: String,

    pub display_name: String,
    pub description: String,

    /// Route paths reachable through this product
    pub api_resources: Vec<String>,

    /// "auto" or "manual" key approval
    pub approval_type: String,

    /// OAuth scopes granted by this product
    pub scopes: Vec<String>,

    #[serde(default)]
    pub attributes: Attributes,

    pub organization_name: String,

    pub created_at: i64,
    pub created_by: String,
    pub lastmodified_at: i64,
    pub lastmodified_by: String,
}
