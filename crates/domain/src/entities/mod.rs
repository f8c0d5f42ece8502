//! Domain entities of the gateway configuration plane.
//!
//! Every entity is serde round-trippable: the cache layer stores entities as
//! encoded payloads and must be able to reconstruct them exactly.

pub mod api_product;
pub mod attribute;
pub mod credential;
pub mod developer;
pub mod developer_app;
pub mod key;
pub mod oauth;
pub mod role;
pub mod user;

pub use api_product::ApiProduct;
pub use attribute::{Attribute, Attributes};
pub use credential::Credential;
pub use developer::Developer;
pub use developer_app::DeveloperApp;
pub use key::{ApiProductStatus, Key};
pub use oauth::OAuthToken;
pub use role::{Role, RoleAllow};
pub use user::User;

/// Status value required for an entity to be usable on the data path.
pub const STATUS_ACTIVE: &str = "active";

/// Status value required for a key or credential to grant access.
pub const STATUS_APPROVED: &str = "approved";
