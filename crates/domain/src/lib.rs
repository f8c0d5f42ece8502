//! Gateplane Domain Layer
pub mod config;
pub mod entities;
pub mod errors;

pub use config::{CacheConfig, ConfigError};
pub use entities::{
    ApiProduct, ApiProductStatus, Attribute, Attributes, Credential, Developer, DeveloperApp, Key,
    OAuthToken, Role, RoleAllow, User,
};
pub use errors::DomainError;
