//! Sales order models

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{timestamp, total_quantity, LineItem};

/// A sales commitment taken by a seller for a client during a correria
///
/// Orders are independent of physical dispatch: nothing links an order line to
/// the dispatch that eventually fulfils it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub client_id: String,
    pub seller_id: String,
    pub correria_id: String,
    #[serde(default)]
    pub items: Vec<LineItem>,
    pub total_value: Decimal,
    #[serde(default, with = "timestamp::option", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Name of the user who settled the order
    #[serde(default)]
    pub settled_by: String,
}

impl Order {
    pub fn total_units(&self) -> i64 {
        total_quantity(&self.items)
    }
}
