use serde::{Deserialize, Serialize};

/// An issued OAuth2 token, addressable by access token, authorization code
/// or refresh token.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OAuthToken {
    pub client_id: String,
    pub user_id: String,
    pub redirect_uri: String,
    pub scope: String,

    pub code: String,
    pub code_created_at: i64,
    pub code_expires_in: i64,

    pub access: String,
    pub access_created_at: i64,
    pub access_expires_in: i64,

    pub refresh: String,
    pub refresh_created_at: i64,
    pub refresh_expires_in: i64,
}

impl OAuthToken {
    /// True if the access token has passed its expiry, relative to
    /// `now_millis` (epoch milliseconds).
    pub fn access_expired(&self, now_millis: i64) -> bool {
        self.access_created_at + self.access_expires_in * 1000 < now_millis
    }
}
