//! Configuration file schema

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::compass::gemini::{DEFAULT_ENDPOINT, DEFAULT_MODEL};
use crate::session::{Role, RoleTable};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampusConfig {
    #[serde(default)]
    pub compass: CompassConfig,
    #[serde(default)]
    pub access: AccessConfig,
}

/// `[compass]`: upstream model used by the Brújula
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompassConfig {
    pub endpoint: String,
    pub model: String,
    /// Shared key used when the student does not bring their own
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

impl Default for CompassConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: None,
        }
    }
}

/// `[access]`: role records and the role assumed when none can be read
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessConfig {
    pub fallback_role: Role,
    /// User id to role name; names are checked when looked up
    pub roles: BTreeMap<String, String>,
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self {
            fallback_role: Role::Premium,
            roles: BTreeMap::new(),
        }
    }
}

impl AccessConfig {
    pub fn role_table(&self) -> RoleTable {
        RoleTable::new(self.roles.clone())
    }
}
