//! Persistent-store ports, one per entity kind.
//!
//! Read methods return `(value, typed error)`; write methods return the
//! typed error only. Implementations live in the persistence layer; the
//! cache layer wraps each port with an identical surface.

pub mod api_product_store;
pub mod credential_store;
pub mod developer_app_store;
pub mod developer_store;
pub mod key_store;
pub mod oauth_token_store;
pub mod role_store;
pub mod user_store;

pub use api_product_store::ApiProductStore;
pub use credential_store::CredentialStore;
pub use developer_app_store::DeveloperAppStore;
pub use developer_store::DeveloperStore;
pub use key_store::KeyStore;
pub use oauth_token_store::OAuthTokenStore;
pub use role_store::RoleStore;
pub use user_store::UserStore;
