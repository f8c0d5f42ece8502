//! Cached store adapters.
//!
//! Each adapter wraps one persistence port with an identical method
//! surface: reads go through [`EntityCache::fetch_or_load`], writes
//! invalidate every key projection of the touched entity before and after
//! the wrapped write. Adapters hold no state beyond the engine and the
//! wrapped store; service-layer callers cannot tell them apart from the
//! uncached ports.

pub mod api_product;
pub mod credential;
pub mod developer;
pub mod developer_app;
pub mod key;
pub mod oauth_token;
pub mod role;
pub mod user;

pub use api_product::CachedApiProductStore;
pub use credential::CachedCredentialStore;
pub use developer::CachedDeveloperStore;
pub use developer_app::CachedDeveloperAppStore;
pub use key::CachedKeyStore;
pub use oauth_token::CachedOAuthTokenStore;
pub use role::CachedRoleStore;
pub use user::CachedUserStore;

use std::sync::Arc;

use gateplane_application::ports::{
    ApiProductStore, CredentialStore, DeveloperAppStore, DeveloperStore, KeyStore,
    OAuthTokenStore, RoleStore, UserStore,
};

use super::storage::EntityCache;

/// Item identifier of a kind's whole-collection entry.
pub(crate) const ALL_ITEMS: &str = "";

/// The full store surface handed to the service layer.
pub struct Stores {
    pub developer: Arc<dyn DeveloperStore>,
    pub developer_app: Arc<dyn DeveloperAppStore>,
    pub api_product: Arc<dyn ApiProductStore>,
    pub credential: Arc<dyn CredentialStore>,
    pub key: Arc<dyn KeyStore>,
    pub role: Arc<dyn RoleStore>,
    pub user: Arc<dyn UserStore>,
    pub oauth_token: Arc<dyn OAuthTokenStore>,
}

impl Stores {
    /// Wrap every store of `inner` with the read-through cache, sharing
    /// one engine across all entity kinds.
    pub fn cached(cache: Arc<EntityCache>, inner: Stores) -> Stores {
        Stores {
            developer: Arc::new(CachedDeveloperStore::new(
                Arc::clone(&cache),
                inner.developer,
            )),
            developer_app: Arc::new(CachedDeveloperAppStore::new(
                Arc::clone(&cache),
                inner.developer_app,
            )),
            api_product: Arc::new(CachedApiProductStore::new(
                Arc::clone(&cache),
                inner.api_product,
            )),
            credential: Arc::new(CachedCredentialStore::new(
                Arc::clone(&cache),
                inner.credential,
            )),
            key: Arc::new(CachedKeyStore::new(Arc::clone(&cache), inner.key)),
            role: Arc::new(CachedRoleStore::new(Arc::clone(&cache), inner.role)),
            user: Arc::new(CachedUserStore::new(Arc::clone(&cache), inner.user)),
            oauth_token: Arc::new(CachedOAuthTokenStore::new(cache, inner.oauth_token)),
        }
    }
}
