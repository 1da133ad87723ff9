//! Running-total kardex maintained as movements are appended

use std::collections::BTreeMap;

use serde::Serialize;

use super::kardex::{Kardex, KardexStats};
use crate::models::{BatchReception, Dispatch};

/// Incrementally maintained kardex
///
/// Each appended reception or dispatch is folded into the totals once, so a
/// query costs nothing beyond a clone. [`super::derive_kardex`] over the same
/// logs yields the same result.
#[derive(Debug, Clone, Default, Serialize)]
pub struct KardexLedger {
    kardex: Kardex,
    receptions_recorded: usize,
    dispatches_recorded: usize,
}

impl KardexLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a ledger by replaying existing logs
    pub fn from_logs(receptions: &[BatchReception], dispatches: &[Dispatch]) -> Self {
        let mut ledger = Self::new();
        receptions.iter().for_each(|r| ledger.record_reception(r));
        dispatches.iter().for_each(|d| ledger.record_dispatch(d));
        ledger
    }

    /// Fold a new reception (one lot) into the totals
    pub fn record_reception(&mut self, reception: &BatchReception) {
        let mut per_reference: BTreeMap<&str, i64> = BTreeMap::new();
        for item in &reception.items {
            *per_reference.entry(item.reference.as_str()).or_insert(0) += item.quantity;
        }

        for (reference, quantity) in per_reference {
            let stats = self.kardex.entry_mut(reference);
            stats.receive(quantity);
            stats.lots += 1;
        }
        self.receptions_recorded += 1;
    }

    /// Fold a new dispatch into the totals
    pub fn record_dispatch(&mut self, dispatch: &Dispatch) {
        for item in &dispatch.items {
            self.kardex.entry_mut(&item.reference).dispatch(item.quantity);
        }
        self.dispatches_recorded += 1;
    }

    pub fn get(&self, reference_id: &str) -> KardexStats {
        self.kardex.get(reference_id)
    }

    pub fn kardex(&self) -> &Kardex {
        &self.kardex
    }

    /// Current totals as an owned kardex
    pub fn snapshot(&self) -> Kardex {
        self.kardex.clone()
    }

    pub fn receptions_recorded(&self) -> usize {
        self.receptions_recorded
    }

    pub fn dispatches_recorded(&self) -> usize {
        self.dispatches_recorded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LineItem;
    use crate::reports::derive_kardex;
    use proptest::prelude::*;

    #[test]
    fn test_append_updates_totals() {
        let mut ledger = KardexLedger::new();
        ledger.record_reception(&BatchReception::new("r1", vec![LineItem::new("A", "M", 10)]));
        ledger.record_reception(&BatchReception::new(
            "r2",
            vec![LineItem::new("A", "S", 5), LineItem::new("B", "S", 3)],
        ));
        ledger.record_dispatch(&Dispatch::new("d1", "211", vec![LineItem::new("A", "M", 4)]));

        let a = ledger.get("A");
        assert_eq!((a.incoming, a.outgoing, a.available, a.lots), (15, 4, 11, 2));
        assert_eq!(ledger.get("B").lots, 1);
        assert_eq!(ledger.receptions_recorded(), 2);
        assert_eq!(ledger.dispatches_recorded(), 1);
    }

    fn line_strategy() -> impl Strategy<Value = LineItem> {
        (
            prop_oneof![Just("A"), Just("B"), Just("C"), Just("D")],
            prop_oneof![Just("S"), Just("M"), Just("L")],
            1i64..=100,
        )
            .prop_map(|(r, s, q)| LineItem::new(r, s, q))
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// The running totals agree with a full rescan of the logs
        #[test]
        fn prop_ledger_matches_full_scan(
            receptions in prop::collection::vec(prop::collection::vec(line_strategy(), 0..6), 0..8),
            dispatches in prop::collection::vec(prop::collection::vec(line_strategy(), 0..6), 0..8)
        ) {
            let receptions: Vec<BatchReception> = receptions
                .into_iter()
                .enumerate()
                .map(|(i, items)| BatchReception::new(format!("r{}", i), items))
                .collect();
            let dispatches: Vec<Dispatch> = dispatches
                .into_iter()
                .enumerate()
                .map(|(i, items)| Dispatch::new(format!("d{}", i), "211", items))
                .collect();

            let ledger = KardexLedger::from_logs(&receptions, &dispatches);
            prop_assert_eq!(ledger.snapshot(), derive_kardex(&receptions, &dispatches));
        }
    }
}
