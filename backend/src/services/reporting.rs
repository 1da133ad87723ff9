//! Reporting service for stock and sales reports
//! Runs the shared reporting engine over the current snapshot and exports CSV

use serde::{Deserialize, Serialize};
use shared::{campaign_options, CampaignOption, CampaignScope, ReportBook, ReportKind, ReportTable};

use crate::error::{AppError, AppResult};
use crate::services::SnapshotStore;

/// Reporting service
#[derive(Clone)]
pub struct ReportingService {
    store: SnapshotStore,
}

/// Report filter parameters
#[derive(Debug, Default, Deserialize)]
pub struct ReportFilter {
    /// `"global"` or a correria id
    pub correria: Option<String>,
    /// Free-text filter (reference id, client id/name, seller name)
    pub filter: Option<String>,
}

impl ReportFilter {
    pub fn scope(&self) -> CampaignScope {
        CampaignScope::from_param(self.correria.as_deref())
    }
}

/// Summary counts for the health endpoint
#[derive(Debug, Serialize)]
pub struct SnapshotSummary {
    pub references: usize,
    pub clients: usize,
    pub receptions: usize,
    pub dispatches: usize,
    pub orders: usize,
}

impl ReportingService {
    pub fn new(store: SnapshotStore) -> Self {
        Self { store }
    }

    /// Compute one report over the current snapshot
    pub async fn get_report(&self, kind: ReportKind, filter: &ReportFilter) -> AppResult<ReportTable> {
        let snapshot = self.store.read().await;
        let scope = filter.scope();

        if let CampaignScope::Campaign(id) = &scope {
            if kind.is_scoped() && snapshot.find_correria(id).is_none() {
                return Err(AppError::NotFound(format!("Correria {}", id)));
            }
        }

        let table = ReportBook::new(&snapshot).render(kind, &scope, filter.filter.as_deref());
        tracing::debug!(report = %kind, scope = %scope, rows = table.len(), "Report computed");
        Ok(table)
    }

    /// Campaign picker entries
    pub async fn get_campaign_options(&self) -> Vec<CampaignOption> {
        campaign_options(&*self.store.read().await)
    }

    pub async fn get_summary(&self) -> SnapshotSummary {
        let snapshot = self.store.read().await;
        SnapshotSummary {
            references: snapshot.references.len(),
            clients: snapshot.clients.len(),
            receptions: snapshot.receptions.len(),
            dispatches: snapshot.dispatches.len(),
            orders: snapshot.orders.len(),
        }
    }

    /// Export any report table as CSV
    pub fn table_to_csv(table: &ReportTable) -> AppResult<String> {
        match table {
            ReportTable::Kardex(rows) => Self::export_to_csv(rows),
            ReportTable::References(rows) => Self::export_to_csv(rows),
            ReportTable::Clients(rows) => Self::export_to_csv(rows),
            ReportTable::Sellers(rows) => Self::export_to_csv(rows),
            ReportTable::SellersById(rows) => Self::export_to_csv(rows),
        }
    }

    /// Export report data as CSV
    pub fn export_to_csv<T: Serialize>(data: &[T]) -> AppResult<String> {
        let mut wtr = csv::Writer::from_writer(vec![]);
        for record in data {
            wtr.serialize(record)
                .map_err(|e| AppError::Internal(format!("CSV serialization error: {}", e)))?;
        }
        let csv_data = String::from_utf8(
            wtr.into_inner()
                .map_err(|e| AppError::Internal(format!("CSV writer error: {}", e)))?,
        )
        .map_err(|e| AppError::Internal(format!("UTF-8 conversion error: {}", e)))?;
        Ok(csv_data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{AppSnapshot, BatchReception, Dispatch, LineItem};

    fn service() -> ReportingService {
        let mut snapshot = AppSnapshot::seed();
        snapshot.receptions.push(BatchReception::new(
            "r1",
            vec![LineItem::new("10210", "M", 30), LineItem::new("12877", "S", 12)],
        ));
        snapshot
            .dispatches
            .push(Dispatch::new("d1", "211", vec![LineItem::new("10210", "M", 20)]));
        ReportingService::new(SnapshotStore::new(snapshot))
    }

    #[tokio::test]
    async fn test_kardex_report() {
        let table = service()
            .get_report(ReportKind::Kardex, &ReportFilter::default())
            .await
            .unwrap();
        match table {
            ReportTable::Kardex(rows) => {
                assert_eq!(rows.len(), 2);
                assert_eq!(rows[0].reference_id, "10210");
                assert_eq!(rows[0].available, 10);
            }
            other => panic!("unexpected table: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unknown_correria_is_not_found() {
        let filter = ReportFilter {
            correria: Some("c9".into()),
            filter: None,
        };
        let result = service().get_report(ReportKind::Client, &filter).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));

        // Unscoped reports ignore the campaign
        assert!(service().get_report(ReportKind::Kardex, &filter).await.is_ok());
    }

    #[tokio::test]
    async fn test_csv_export() {
        let table = service()
            .get_report(ReportKind::Client, &ReportFilter::default())
            .await
            .unwrap();
        let csv = ReportingService::table_to_csv(&table).unwrap();
        let mut lines = csv.lines();
        assert_eq!(
            lines.next(),
            Some("client_id,name,seller,ordered,dispatched,pending")
        );
        assert_eq!(lines.next(), Some("211,Media naranja,John Bolivar,50,20,30"));
        assert_eq!(lines.next(), Some("212,La pantaleta,Lina Pulgarin,0,0,0"));
    }

    #[tokio::test]
    async fn test_summary_and_options() {
        let service = service();
        let summary = service.get_summary().await;
        assert_eq!(summary.receptions, 1);
        assert_eq!(summary.dispatches, 1);
        assert_eq!(service.get_campaign_options().await.len(), 3);
    }
}
