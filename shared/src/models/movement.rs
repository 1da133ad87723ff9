//! Stock movement models: receptions (stock in) and dispatches (stock out)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::timestamp;

/// One line of a reception, dispatch or order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LineItem {
    /// Reference id
    pub reference: String,
    pub size: String,
    pub quantity: i64,
}

impl LineItem {
    pub fn new(reference: impl Into<String>, size: impl Into<String>, quantity: i64) -> Self {
        Self {
            reference: reference.into(),
            size: size.into(),
            quantity,
        }
    }
}

/// Sum the quantities of a sequence of line items
pub fn total_quantity(items: &[LineItem]) -> i64 {
    items.iter().map(|item| item.quantity).sum()
}

/// A batch of garments entering inventory (one lot)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BatchReception {
    pub id: String,
    #[serde(default)]
    pub items: Vec<LineItem>,
    /// Name of the user who registered the batch
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(default, with = "timestamp::option", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl BatchReception {
    pub fn new(id: impl Into<String>, items: Vec<LineItem>) -> Self {
        Self {
            id: id.into(),
            items,
            created_by: None,
            created_at: None,
        }
    }

    pub fn total_quantity(&self) -> i64 {
        total_quantity(&self.items)
    }
}

/// Garments leaving inventory towards a client
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Dispatch {
    pub id: String,
    pub client_id: String,
    #[serde(default)]
    pub items: Vec<LineItem>,
    /// Campaign the dispatch belongs to; absent on records written before
    /// dispatches were attributed to a correria
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correria_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dispatched_by: Option<String>,
    #[serde(default, with = "timestamp::option", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Dispatch {
    pub fn new(id: impl Into<String>, client_id: impl Into<String>, items: Vec<LineItem>) -> Self {
        Self {
            id: id.into(),
            client_id: client_id.into(),
            items,
            correria_id: None,
            dispatched_by: None,
            created_at: None,
        }
    }

    /// Attribute the dispatch to a campaign
    pub fn in_correria(mut self, correria_id: impl Into<String>) -> Self {
        self.correria_id = Some(correria_id.into());
        self
    }

    pub fn total_quantity(&self) -> i64 {
        total_quantity(&self.items)
    }
}
