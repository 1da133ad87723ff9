//! Seller performance reports

use std::collections::{BTreeSet, HashMap};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::collate::locale_cmp;
use crate::models::{AppSnapshot, Seller};
use crate::types::CampaignScope;

/// Units and value sold under one seller name
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SellerPerformanceRow {
    pub seller_name: String,
    pub total_units: i64,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_value: Decimal,
}

/// Units and value sold by one seller record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SellerByIdRow {
    pub seller_id: String,
    pub seller_name: String,
    pub client_count: i64,
    pub total_units: i64,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_value: Decimal,
}

#[derive(Debug, Clone, Copy, Default)]
struct SalesTotals {
    units: i64,
    value: Decimal,
}

/// Order totals keyed by seller id, restricted to the scope
fn totals_by_seller_id<'a>(
    snapshot: &'a AppSnapshot,
    scope: &CampaignScope,
) -> HashMap<&'a str, SalesTotals> {
    let mut totals: HashMap<&str, SalesTotals> = HashMap::new();
    for order in snapshot
        .orders
        .iter()
        .filter(|o| scope.includes(&o.correria_id))
    {
        let entry = totals.entry(order.seller_id.as_str()).or_default();
        entry.units += order.total_units();
        entry.value += order.total_value;
    }
    totals
}

/// Seller performance grouped by the seller names recorded on clients
///
/// Names are matched to seller records by equality. Several records sharing a
/// name collapse into one row carrying all of their orders; a name without any
/// record reports zero.
pub fn seller_performance(
    snapshot: &AppSnapshot,
    scope: &CampaignScope,
    filter: Option<&str>,
) -> Vec<SellerPerformanceRow> {
    let totals = totals_by_seller_id(snapshot, scope);
    let needle = filter
        .filter(|f| !f.is_empty())
        .map(str::to_uppercase);

    // BTreeSet: distinct names in plain lexicographic order
    let names: BTreeSet<&str> = snapshot
        .clients
        .iter()
        .map(|c| c.seller.as_str())
        .collect();

    names
        .into_iter()
        .filter(|name| {
            needle
                .as_deref()
                .map_or(true, |n| name.to_uppercase().contains(n))
        })
        .map(|name| {
            let ids: BTreeSet<&str> = snapshot
                .sellers
                .iter()
                .filter(|s| s.name == name)
                .map(|s| s.id.as_str())
                .collect();

            let sum = ids
                .iter()
                .filter_map(|id| totals.get(id))
                .fold(SalesTotals::default(), |mut acc, t| {
                    acc.units += t.units;
                    acc.value += t.value;
                    acc
                });

            SellerPerformanceRow {
                seller_name: name.to_string(),
                total_units: sum.units,
                total_value: sum.value,
            }
        })
        .collect()
}

/// Seller performance grouped by seller record id
///
/// When several records share an id the first one names the row. Each client
/// is counted once, under [`crate::models::Client::attending_seller_id`].
pub fn seller_performance_by_id(
    snapshot: &AppSnapshot,
    scope: &CampaignScope,
) -> Vec<SellerByIdRow> {
    let totals = totals_by_seller_id(snapshot, scope);

    let mut clients: HashMap<&str, i64> = HashMap::new();
    for client in &snapshot.clients {
        if let Some(id) = client.attending_seller_id(&snapshot.sellers) {
            *clients.entry(id).or_insert(0) += 1;
        }
    }

    let mut records: Vec<(&str, Vec<&Seller>)> = Vec::new();
    for seller in &snapshot.sellers {
        match records.iter_mut().find(|(id, _)| *id == seller.id) {
            Some((_, group)) => group.push(seller),
            None => records.push((seller.id.as_str(), vec![seller])),
        }
    }

    let mut rows: Vec<SellerByIdRow> = records
        .into_iter()
        .map(|(id, group)| {
            let client_count = clients.get(id).copied().unwrap_or(0);
            let sum = totals.get(id).copied().unwrap_or_default();

            SellerByIdRow {
                seller_id: id.to_string(),
                seller_name: group[0].name.clone(),
                client_count,
                total_units: sum.units,
                total_value: sum.value,
            }
        })
        .collect();

    rows.sort_by(|a, b| locale_cmp(&a.seller_id, &b.seller_id));
    rows
}
