//! Member roles and fail-open role resolution

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{CampusError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Free,
    Premium,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Free => "free",
            Role::Premium => "premium",
            Role::Admin => "admin",
        }
    }

    /// Premium pages are open to premium members and admins
    pub fn has_premium_access(&self) -> bool {
        matches!(self, Role::Premium | Role::Admin)
    }
}

impl FromStr for Role {
    type Err = CampusError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "free" | "gratis" => Ok(Role::Free),
            "premium" => Ok(Role::Premium),
            "admin" => Ok(Role::Admin),
            other => Err(CampusError::unsupported("role", other, "free, premium, admin")),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Role store of the auth provider
pub trait RoleLookup {
    /// `Ok(None)` when the user has no role record
    fn role_for(&self, user_id: &str) -> Result<Option<Role>>;
}

/// Role records kept in configuration
///
/// Records are stored as written and parsed on lookup, so an unreadable
/// record only affects its own user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleTable {
    roles: BTreeMap<String, String>,
}

impl RoleTable {
    pub fn new(roles: BTreeMap<String, String>) -> Self {
        Self { roles }
    }
}

impl RoleLookup for RoleTable {
    fn role_for(&self, user_id: &str) -> Result<Option<Role>> {
        self.roles
            .get(user_id)
            .map(|raw| raw.parse::<Role>())
            .transpose()
    }
}

/// Resolve a user's role, falling back instead of failing
///
/// A lookup error or a missing record both yield `fallback`. Role gating
/// never blocks a page on a provider failure.
pub fn resolve_role(lookup: &dyn RoleLookup, user_id: &str, fallback: Role) -> Role {
    match lookup.role_for(user_id) {
        Ok(Some(role)) => role,
        Ok(None) => {
            warn!(user = user_id, fallback = %fallback, "no role record, using fallback role");
            fallback
        }
        Err(e) => {
            warn!(
                user = user_id,
                fallback = %fallback,
                error = %e,
                "role lookup failed, using fallback role"
            );
            fallback
        }
    }
}

/// Gate for premium-only pages
pub fn require_premium(role: Role) -> Result<()> {
    if role.has_premium_access() {
        Ok(())
    } else {
        Err(CampusError::AccessDenied {
            role: role.to_string(),
        })
    }
}
