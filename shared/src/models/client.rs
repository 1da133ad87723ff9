//! Client and seller models

use serde::{Deserialize, Serialize};

/// A retail client buying garments
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    /// Seller name as typed on the client form (not a key)
    #[serde(default)]
    pub seller: String,
    /// Explicit link to `Seller::id`, when the client record carries one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seller_id: Option<String>,
}

impl Client {
    /// Id of the seller record this client is counted under
    ///
    /// The explicit `seller_id` wins. Records without it go to the first
    /// seller carrying the denormalized seller name, so a client is never
    /// counted under two records.
    pub fn attending_seller_id<'a>(&'a self, sellers: &'a [Seller]) -> Option<&'a str> {
        match &self.seller_id {
            Some(id) => Some(id.as_str()),
            None => sellers
                .iter()
                .find(|s| s.name == self.seller)
                .map(|s| s.id.as_str()),
        }
    }
}

/// A sales representative
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Seller {
    pub id: String,
    pub name: String,
}

impl Seller {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
