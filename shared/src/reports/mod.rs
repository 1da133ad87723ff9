//! Reporting engine
//!
//! Pure functions deriving stock and sales reports from an [`AppSnapshot`]:
//! - Kardex: per-reference incoming/outgoing/available units and lot count
//! - Reference detail: catalogue references annotated with their kardex line
//! - Client detail: ordered vs dispatched units and pending balance
//! - Seller performance: units and value sold, by seller name or seller id
//!
//! Nothing here performs I/O or keeps state between calls.

mod clients;
mod collate;
mod kardex;
mod ledger;
mod references;
mod sellers;

pub use clients::*;
pub use collate::*;
pub use kardex::*;
pub use ledger::*;
pub use references::*;
pub use sellers::*;

use serde::Serialize;

use crate::models::AppSnapshot;
use crate::types::{CampaignOption, CampaignScope, ReportKind};

/// Rows of any report, ready for a presentation layer
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum ReportTable {
    Kardex(Vec<KardexRow>),
    References(Vec<ReferenceDetailRow>),
    Clients(Vec<ClientPendingRow>),
    Sellers(Vec<SellerPerformanceRow>),
    SellersById(Vec<SellerByIdRow>),
}

impl ReportTable {
    pub fn len(&self) -> usize {
        match self {
            ReportTable::Kardex(rows) => rows.len(),
            ReportTable::References(rows) => rows.len(),
            ReportTable::Clients(rows) => rows.len(),
            ReportTable::Sellers(rows) => rows.len(),
            ReportTable::SellersById(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// All reports over one snapshot, sharing a single kardex derivation
pub struct ReportBook<'a> {
    snapshot: &'a AppSnapshot,
    kardex: Kardex,
}

impl<'a> ReportBook<'a> {
    pub fn new(snapshot: &'a AppSnapshot) -> Self {
        Self {
            snapshot,
            kardex: derive_kardex(&snapshot.receptions, &snapshot.dispatches),
        }
    }

    pub fn kardex(&self) -> &Kardex {
        &self.kardex
    }

    pub fn references(&self, filter: Option<&str>) -> Vec<ReferenceDetailRow> {
        reference_detail(&self.snapshot.references, &self.kardex, filter)
    }

    pub fn clients(&self, scope: &CampaignScope, filter: Option<&str>) -> Vec<ClientPendingRow> {
        client_pending(self.snapshot, scope, filter)
    }

    pub fn sellers(
        &self,
        scope: &CampaignScope,
        filter: Option<&str>,
    ) -> Vec<SellerPerformanceRow> {
        seller_performance(self.snapshot, scope, filter)
    }

    pub fn sellers_by_id(&self, scope: &CampaignScope) -> Vec<SellerByIdRow> {
        seller_performance_by_id(self.snapshot, scope)
    }

    /// Render one report tab
    ///
    /// `scope` is ignored by unscoped reports, `filter` by the kardex and the
    /// by-id seller table.
    pub fn render(
        &self,
        kind: ReportKind,
        scope: &CampaignScope,
        filter: Option<&str>,
    ) -> ReportTable {
        match kind {
            ReportKind::Kardex => ReportTable::Kardex(self.kardex.rows()),
            ReportKind::Reference => ReportTable::References(self.references(filter)),
            ReportKind::Client => ReportTable::Clients(self.clients(scope, filter)),
            ReportKind::Seller => ReportTable::Sellers(self.sellers(scope, filter)),
            ReportKind::SellerById => ReportTable::SellersById(self.sellers_by_id(scope)),
        }
    }
}

/// Campaign picker entries: the global view followed by every correria
pub fn campaign_options(snapshot: &AppSnapshot) -> Vec<CampaignOption> {
    std::iter::once(CampaignOption {
        value: CampaignScope::Global,
        label: "Histórico Global".to_string(),
    })
    .chain(snapshot.correrias.iter().map(|c| CampaignOption {
        value: CampaignScope::Campaign(c.id.clone()),
        label: c.label(),
    }))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_dispatches_on_kind() {
        let snapshot = AppSnapshot::seed();
        let book = ReportBook::new(&snapshot);

        assert!(book
            .render(ReportKind::Kardex, &CampaignScope::Global, None)
            .is_empty());
        assert_eq!(
            book.render(ReportKind::Reference, &CampaignScope::Global, None)
                .len(),
            3
        );
        match book.render(ReportKind::Client, &CampaignScope::Global, Some("media")) {
            ReportTable::Clients(rows) => assert_eq!(rows[0].pending, 50),
            other => panic!("unexpected table: {:?}", other),
        }
        assert_eq!(
            book.render(ReportKind::SellerById, &CampaignScope::Global, None)
                .len(),
            2
        );
    }

    #[test]
    fn test_campaign_options() {
        let options = campaign_options(&AppSnapshot::seed());
        assert_eq!(options.len(), 3);
        assert!(options[0].value.is_global());
        assert_eq!(options[1].label, "Madres 2025");
        assert_eq!(options[2].value, CampaignScope::Campaign("c2".into()));
    }

    #[test]
    fn test_table_serializes_as_plain_array() {
        let snapshot = AppSnapshot::seed();
        let book = ReportBook::new(&snapshot);
        let json = serde_json::to_value(book.render(
            ReportKind::Seller,
            &CampaignScope::Global,
            None,
        ))
        .unwrap();
        assert!(json.is_array());
        assert_eq!(json[0]["seller_name"], "John Bolivar");
    }
}
