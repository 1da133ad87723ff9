//! Kardex (stock ledger) derivation
//!
//! The kardex is rebuilt from the full reception and dispatch logs on every
//! call. See [`super::KardexLedger`] for the running-total variant.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::collate::locale_cmp;
use crate::models::{BatchReception, Dispatch};

/// Stock movement totals of one reference
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct KardexStats {
    /// Units received
    pub incoming: i64,
    /// Units dispatched
    pub outgoing: i64,
    /// `incoming - outgoing`, negative when dispatches exceed receptions
    pub available: i64,
    /// Distinct receptions (lots) that carried the reference
    pub lots: i64,
}

impl KardexStats {
    pub(crate) fn receive(&mut self, quantity: i64) {
        self.incoming += quantity;
        self.available += quantity;
    }

    pub(crate) fn dispatch(&mut self, quantity: i64) {
        self.outgoing += quantity;
        self.available -= quantity;
    }

    fn accumulate(&mut self, other: &KardexStats) {
        self.incoming += other.incoming;
        self.outgoing += other.outgoing;
        self.available += other.available;
        self.lots += other.lots;
    }
}

/// Mapping reference id -> stock totals
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Kardex {
    entries: BTreeMap<String, KardexStats>,
}

/// One rendered kardex line
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct KardexRow {
    pub reference_id: String,
    pub lots: i64,
    pub incoming: i64,
    pub outgoing: i64,
    pub available: i64,
}

impl Kardex {
    /// Stats of a reference; all zero when it never moved
    pub fn get(&self, reference_id: &str) -> KardexStats {
        self.entries.get(reference_id).copied().unwrap_or_default()
    }

    pub fn contains(&self, reference_id: &str) -> bool {
        self.entries.contains_key(reference_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &KardexStats)> {
        self.entries.iter().map(|(id, stats)| (id.as_str(), stats))
    }

    pub(crate) fn entry_mut(&mut self, reference_id: &str) -> &mut KardexStats {
        self.entries.entry(reference_id.to_string()).or_default()
    }

    /// Ledger lines sorted by reference id
    pub fn rows(&self) -> Vec<KardexRow> {
        let mut rows: Vec<KardexRow> = self
            .entries
            .iter()
            .map(|(id, stats)| KardexRow {
                reference_id: id.clone(),
                lots: stats.lots,
                incoming: stats.incoming,
                outgoing: stats.outgoing,
                available: stats.available,
            })
            .collect();
        rows.sort_by(|a, b| locale_cmp(&a.reference_id, &b.reference_id));
        rows
    }

    /// Column totals over every reference
    pub fn totals(&self) -> KardexStats {
        self.entries
            .values()
            .fold(KardexStats::default(), |mut acc, stats| {
                acc.accumulate(stats);
                acc
            })
    }
}

/// Derive the kardex from the reception and dispatch logs
///
/// A reception counts as one lot for every distinct reference it carries, no
/// matter how many lines (sizes) it has for that reference.
pub fn derive_kardex(receptions: &[BatchReception], dispatches: &[Dispatch]) -> Kardex {
    let mut kardex = Kardex::default();

    for reception in receptions {
        let mut touched: BTreeSet<&str> = BTreeSet::new();
        for item in &reception.items {
            kardex.entry_mut(&item.reference).receive(item.quantity);
            touched.insert(item.reference.as_str());
        }
        for reference in touched {
            kardex.entry_mut(reference).lots += 1;
        }
    }

    for dispatch in dispatches {
        for item in &dispatch.items {
            kardex.entry_mut(&item.reference).dispatch(item.quantity);
        }
    }

    kardex
}
