use serde::{Deserialize, Serialize};

use super::key::ApiProductStatus;
use super::STATUS_APPROVED;

/// Consumer credential of a developer app, used in the OAuth2 flow.
///
/// Distinct from [`super::Key`]: credentials carry the secret material
/// exchanged for tokens, keys carry the per-product entitlements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Credential {
    pub consumer_key: String,
    pub consumer_secret: String,

    /// Api products this credential may request tokens for
    pub api_products: Vec<ApiProductStatus>,

    /// Developer app this credential belongs to
    pub app_id: String,

    /// Expiry date in epoch milliseconds, -1 for no expiry
    pub expires_at: i64,

    /// Issue date in epoch milliseconds
    pub issued_at: i64,

    /// Should be "approved" to allow access
    pub status: String,
}

impl Credential {
    pub fn is_approved(&self) -> bool {
        self.status == STATUS_APPROVED
    }
}
