//! Reference detail view

use serde::{Deserialize, Serialize};

use super::collate::locale_cmp;
use super::kardex::Kardex;
use crate::models::Reference;

/// A catalogue reference with its stock movement
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReferenceDetailRow {
    pub reference_id: String,
    pub description: String,
    pub designer: String,
    pub lots: i64,
    pub incoming: i64,
    pub outgoing: i64,
    pub available: i64,
}

/// List catalogue references, optionally narrowed by an id fragment
///
/// The fragment is upper-cased before matching since reference ids are
/// upper-case. References that never moved report zero stock.
pub fn reference_detail(
    references: &[Reference],
    kardex: &Kardex,
    filter: Option<&str>,
) -> Vec<ReferenceDetailRow> {
    let needle = filter
        .filter(|f| !f.is_empty())
        .map(str::to_uppercase);

    let mut rows: Vec<ReferenceDetailRow> = references
        .iter()
        .filter(|r| match &needle {
            Some(needle) => r.id.contains(needle.as_str()),
            None => true,
        })
        .map(|r| {
            let stats = kardex.get(&r.id);
            ReferenceDetailRow {
                reference_id: r.id.clone(),
                description: r.description.clone(),
                designer: r.designer.clone(),
                lots: stats.lots,
                incoming: stats.incoming,
                outgoing: stats.outgoing,
                available: stats.available,
            }
        })
        .collect();

    rows.sort_by(|a, b| locale_cmp(&a.reference_id, &b.reference_id));
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AppSnapshot, BatchReception, LineItem};
    use crate::reports::derive_kardex;

    #[test]
    fn test_all_references_sorted_with_zero_default() {
        let snapshot = AppSnapshot::seed();
        let receptions = vec![BatchReception::new("r1", vec![LineItem::new("12871", "M", 8)])];
        let kardex = derive_kardex(&receptions, &[]);

        let rows = reference_detail(&snapshot.references, &kardex, None);
        let ids: Vec<_> = rows.iter().map(|r| r.reference_id.as_str()).collect();
        assert_eq!(ids, vec!["10210", "12871", "12877"]);

        assert_eq!(rows[0].incoming, 0);
        assert_eq!(rows[0].lots, 0);
        assert_eq!(rows[1].incoming, 8);
        assert_eq!(rows[1].available, 8);
    }

    #[test]
    fn test_filter_is_upper_cased() {
        let mut snapshot = AppSnapshot::seed();
        snapshot.references[0].id = "BL10210".into();

        let rows = reference_detail(&snapshot.references, &Kardex::default(), Some("bl"));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].reference_id, "BL10210");
    }

    #[test]
    fn test_filter_by_fragment() {
        let snapshot = AppSnapshot::seed();
        let rows = reference_detail(&snapshot.references, &Kardex::default(), Some("287"));
        let ids: Vec<_> = rows.iter().map(|r| r.reference_id.as_str()).collect();
        assert_eq!(ids, vec!["12871", "12877"]);

        let rows = reference_detail(&snapshot.references, &Kardex::default(), Some(""));
        assert_eq!(rows.len(), 3);
    }
}
