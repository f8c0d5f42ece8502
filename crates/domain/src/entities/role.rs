use serde::{Deserialize, Serialize};

/// One method/path rule granted by a role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleAllow {
    /// HTTP methods this rule covers (uppercase)
    pub methods: Vec<String>,

    /// Request paths this rule covers
    pub paths: Vec<String>,
}

/// An admin role: a named set of allowed methods and paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    /// Role name (not changeable)
    pub name: String,

    pub display_name: String,

    pub allows: Vec<RoleAllow>,

    pub created_at: i64,
    pub created_by: String,
    pub lastmodified_at: i64,
    pub lastmodified_by: String,
}

impl Role {
    /// True if any rule of this role covers the method and path pair.
    pub fn permits(&self, method: &str, path: &str) -> bool {
        self.allows.iter().any(|allow| {
            allow.methods.iter().any(|m| m.eq_ignore_ascii_case(method))
                && allow.paths.iter().any(|p| p == path)
        })
    }
}
