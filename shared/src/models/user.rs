//! User models

use serde::{Deserialize, Serialize};

/// A user of the sales system
///
/// Users travel with the snapshot because the stored document holds them; the
/// reporting engine never inspects them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    /// Short code typed on the login form (e.g., "ADM")
    pub login_code: String,
    pub role: UserRole,
}

/// Role of a user
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[serde(alias = "ADMIN")]
    Admin,
    #[default]
    #[serde(alias = "GENERAL")]
    General,
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Admin => write!(f, "admin"),
            UserRole::General => write!(f, "general"),
        }
    }
}
