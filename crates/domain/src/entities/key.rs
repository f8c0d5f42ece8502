use serde::{Deserialize, Serialize};

use super::attribute::Attributes;
use super::STATUS_APPROVED;

/// Approval state of one api product assigned to a key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiProductStatus {
    pub api_product: String,

    /// Should be "approved" to allow access
    pub status: String,
}

/// An apikey entitlement: grants access to the api products listed on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Key {
    /// The key presented by callers for authentication
    pub consumer_key: String,

    /// Secret of this key, needed to request an OAuth2 access token
    pub consumer_secret: String,

    /// Api products reachable with this key
    pub api_products: Vec<ApiProductStatus>,

    /// Developer app this key belongs to
    pub app_id: String,

    #[serde(default)]
    pub attributes: Attributes,

    /// Expiry date in epoch milliseconds, -1 for no expiry
    pub expires_at: i64,

    /// Issue date in epoch milliseconds
    pub issued_at: i64,

    /// Should be "approved" to allow access
    pub status: String,
}

impl Key {
    pub fn approve(&mut self) {
        self.status = STATUS_APPROVED.to_string();
    }

    pub fn is_approved(&self) -> bool {
        self.status == STATUS_APPROVED
    }

    /// Names of all products assigned to this key, approved or not.
    pub fn product_names(&self) -> impl Iterator<Item = &str> {
        self.api_products.iter().map(|p| p.api_product.as_str())
    }
}
