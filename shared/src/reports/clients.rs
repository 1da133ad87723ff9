//! Client detail: ordered vs dispatched units

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::collate::locale_cmp;
use crate::models::{AppSnapshot, Client};
use crate::types::CampaignScope;

/// Ordered, dispatched and pending units of one client
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClientPendingRow {
    pub client_id: String,
    pub name: String,
    /// Seller name recorded on the client
    pub seller: String,
    pub ordered: i64,
    pub dispatched: i64,
    /// `max(0, ordered - dispatched)`
    pub pending: i64,
}

/// Whether a client matches a free-text filter on id or name
fn matches_filter(client: &Client, needle: &str) -> bool {
    client.id.contains(needle) || client.name.to_uppercase().contains(needle)
}

/// Compute the client pending table
///
/// Orders are scoped by their campaign. Dispatches are scoped by their own
/// campaign when they carry one; dispatches without a campaign only count in
/// the global view.
pub fn client_pending(
    snapshot: &AppSnapshot,
    scope: &CampaignScope,
    filter: Option<&str>,
) -> Vec<ClientPendingRow> {
    let mut ordered: HashMap<&str, i64> = HashMap::new();
    for order in snapshot
        .orders
        .iter()
        .filter(|o| scope.includes(&o.correria_id))
    {
        *ordered.entry(order.client_id.as_str()).or_insert(0) += order.total_units();
    }

    let mut dispatched: HashMap<&str, i64> = HashMap::new();
    for dispatch in snapshot
        .dispatches
        .iter()
        .filter(|d| scope.includes_optional(d.correria_id.as_deref()))
    {
        *dispatched.entry(dispatch.client_id.as_str()).or_insert(0) += dispatch.total_quantity();
    }

    let needle = filter
        .filter(|f| !f.is_empty())
        .map(str::to_uppercase);

    let mut rows: Vec<ClientPendingRow> = snapshot
        .clients
        .iter()
        .filter(|c| needle.as_deref().map_or(true, |n| matches_filter(c, n)))
        .map(|c| {
            let ordered = ordered.get(c.id.as_str()).copied().unwrap_or(0);
            let dispatched = dispatched.get(c.id.as_str()).copied().unwrap_or(0);
            ClientPendingRow {
                client_id: c.id.clone(),
                name: c.name.clone(),
                seller: c.seller.clone(),
                ordered,
                dispatched,
                pending: (ordered - dispatched).max(0),
            }
        })
        .collect();

    rows.sort_by(|a, b| locale_cmp(&a.client_id, &b.client_id));
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Dispatch, LineItem};

    fn row<'a>(rows: &'a [ClientPendingRow], id: &str) -> &'a ClientPendingRow {
        rows.iter().find(|r| r.client_id == id).unwrap()
    }

    #[test]
    fn test_seed_order_pending_per_scope() {
        let snapshot = AppSnapshot::seed();

        let global = client_pending(&snapshot, &CampaignScope::Global, None);
        let media = row(&global, "211");
        assert_eq!((media.ordered, media.dispatched, media.pending), (50, 0, 50));

        let c1 = client_pending(&snapshot, &CampaignScope::Campaign("c1".into()), None);
        assert_eq!(row(&c1, "211").pending, 50);

        let c2 = client_pending(&snapshot, &CampaignScope::Campaign("c2".into()), None);
        let media = row(&c2, "211");
        assert_eq!((media.ordered, media.pending), (0, 0));
    }

    #[test]
    fn test_over_dispatch_clamps_pending() {
        let mut snapshot = AppSnapshot::seed();
        snapshot
            .dispatches
            .push(Dispatch::new("d1", "211", vec![LineItem::new("10210", "M", 80)]));

        let rows = client_pending(&snapshot, &CampaignScope::Global, None);
        let media = row(&rows, "211");
        assert_eq!(media.dispatched, 80);
        assert_eq!(media.pending, 0);
    }

    #[test]
    fn test_dispatch_scoping() {
        let mut snapshot = AppSnapshot::seed();
        snapshot
            .dispatches
            .push(Dispatch::new("d1", "211", vec![LineItem::new("10210", "M", 20)]));
        snapshot.dispatches.push(
            Dispatch::new("d2", "211", vec![LineItem::new("10210", "S", 5)]).in_correria("c1"),
        );

        let global = client_pending(&snapshot, &CampaignScope::Global, None);
        assert_eq!(row(&global, "211").dispatched, 25);

        // The legacy dispatch without a campaign stays out of campaign views
        let c1 = client_pending(&snapshot, &CampaignScope::Campaign("c1".into()), None);
        let media = row(&c1, "211");
        assert_eq!(media.dispatched, 5);
        assert_eq!(media.pending, 45);
    }

    #[test]
    fn test_filter_on_id_or_name() {
        let snapshot = AppSnapshot::seed();

        let by_name = client_pending(&snapshot, &CampaignScope::Global, Some("panta"));
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].client_id, "212");

        let by_id = client_pending(&snapshot, &CampaignScope::Global, Some("21"));
        assert_eq!(by_id.len(), 2);
        assert_eq!(by_id[0].client_id, "211");

        assert!(client_pending(&snapshot, &CampaignScope::Global, Some("zz")).is_empty());
    }
}
