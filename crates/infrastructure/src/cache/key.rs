use std::fmt;

/// Discriminator for the entity kinds the cache may hold.
///
/// The kind is a structural part of every [`CacheKey`], so entries of two
/// kinds can never collide even when their item identifiers are textually
/// equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum EntityKind {
    Developer = 0,
    DeveloperApp = 1,
    ApiProduct = 2,
    Credential = 3,
    Key = 4,
    Role = 5,
    User = 6,
    OAuthToken = 7,
}

impl EntityKind {
    pub const COUNT: usize = 8;

    pub const ALL: [EntityKind; Self::COUNT] = [
        EntityKind::Developer,
        EntityKind::DeveloperApp,
        EntityKind::ApiProduct,
        EntityKind::Credential,
        EntityKind::Key,
        EntityKind::Role,
        EntityKind::User,
        EntityKind::OAuthToken,
    ];

    /// Stable tag used for metrics labels and log output.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Developer => "developer",
            EntityKind::DeveloperApp => "developer_app",
            EntityKind::ApiProduct => "api_product",
            EntityKind::Credential => "credential",
            EntityKind::Key => "key",
            EntityKind::Role => "role",
            EntityKind::User => "user",
            EntityKind::OAuthToken => "oauth_token",
        }
    }

    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Composite cache key: entity kind plus item identifier.
///
/// An empty item identifier denotes the kind's whole-collection entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub kind: EntityKind,
    pub item: Box<str>,
}

impl CacheKey {
    pub fn new(kind: EntityKind, item: &str) -> Self {
        Self {
            kind,
            item: Box::from(item),
        }
    }

    pub fn is_collection(&self) -> bool {
        self.item.is_empty()
    }

    /// Approximate heap footprint of this key, for the byte ledger.
    pub fn cost(&self) -> usize {
        self.item.len() + std::mem::size_of::<Self>()
    }

    /// Textual `kind/item` form for logs.
    pub fn render(&self) -> String {
        format!("{}/{}", self.kind, self.item)
    }
}
