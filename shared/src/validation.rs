//! Validation utilities for snapshot data
//!
//! Reports never reject data: these checks surface suspicious records so the
//! caller can log or display them.

use std::collections::HashSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{AppSnapshot, LineItem};

// ============================================================================
// Field Validations
// ============================================================================

/// Validate a line item quantity (whole garments, at least one)
pub fn validate_quantity(quantity: i64) -> Result<(), &'static str> {
    if quantity <= 0 {
        return Err("Quantity must be greater than zero");
    }
    Ok(())
}

/// Validate reference id format (non-empty, upper-case alphanumeric)
pub fn validate_reference_id(id: &str) -> Result<(), &'static str> {
    if id.trim().is_empty() {
        return Err("Reference id cannot be empty");
    }
    if id.chars().any(|c| c.is_lowercase()) {
        return Err("Reference id must be upper-case");
    }
    if !id.chars().all(|c| c.is_alphanumeric() || c == '-') {
        return Err("Reference id must be alphanumeric");
    }
    Ok(())
}

/// Validate average cloth consumption per garment (meters, 0 < avg <= 10)
pub fn validate_cloth_average(average: Decimal) -> Result<(), &'static str> {
    if average <= Decimal::ZERO {
        return Err("Cloth average must be greater than zero");
    }
    if average > Decimal::from(10) {
        return Err("Cloth average above 10 meters per garment");
    }
    Ok(())
}

/// Validate a monetary amount is not negative
pub fn validate_amount(amount: Decimal) -> Result<(), &'static str> {
    if amount < Decimal::ZERO {
        return Err("Amount cannot be negative");
    }
    Ok(())
}

/// Validate correria year (four digits)
pub fn validate_correria_year(year: &str) -> Result<(), &'static str> {
    if year.len() != 4 || !year.chars().all(|c| c.is_ascii_digit()) {
        return Err("Correria year must have four digits");
    }
    Ok(())
}

/// Validate production figures (cut never exceeds programmed)
pub fn validate_production(programmed: i64, cut: i64) -> Result<(), &'static str> {
    if programmed < 0 || cut < 0 {
        return Err("Production quantities cannot be negative");
    }
    if cut > programmed {
        return Err("Cut quantity exceeds programmed quantity");
    }
    Ok(())
}

// ============================================================================
// Snapshot Validation
// ============================================================================

/// A suspicious record found in a snapshot
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SnapshotIssue {
    /// Collection the record belongs to (e.g., "orders")
    pub collection: String,
    pub record_id: String,
    pub message: String,
}

impl SnapshotIssue {
    fn new(collection: &str, record_id: &str, message: impl Into<String>) -> Self {
        Self {
            collection: collection.to_string(),
            record_id: record_id.to_string(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for SnapshotIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}: {}", self.collection, self.record_id, self.message)
    }
}

fn check_duplicates<'a>(
    collection: &str,
    ids: impl Iterator<Item = &'a str>,
    issues: &mut Vec<SnapshotIssue>,
) {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            issues.push(SnapshotIssue::new(collection, id, "Duplicate id"));
        }
    }
}

fn check_items(
    collection: &str,
    record_id: &str,
    items: &[LineItem],
    references: &HashSet<&str>,
    issues: &mut Vec<SnapshotIssue>,
) {
    for item in items {
        if let Err(msg) = validate_quantity(item.quantity) {
            issues.push(SnapshotIssue::new(
                collection,
                record_id,
                format!("{} ({} {})", msg, item.reference, item.size),
            ));
        }
        if !references.contains(item.reference.as_str()) {
            issues.push(SnapshotIssue::new(
                collection,
                record_id,
                format!("Unknown reference {}", item.reference),
            ));
        }
    }
}

/// Collect every suspicious record of a snapshot
pub fn validate_snapshot(snapshot: &AppSnapshot) -> Vec<SnapshotIssue> {
    let mut issues = Vec::new();

    let references: HashSet<&str> = snapshot.references.iter().map(|r| r.id.as_str()).collect();
    let clients: HashSet<&str> = snapshot.clients.iter().map(|c| c.id.as_str()).collect();
    let correrias: HashSet<&str> = snapshot.correrias.iter().map(|c| c.id.as_str()).collect();
    let seller_ids: HashSet<&str> = snapshot.sellers.iter().map(|s| s.id.as_str()).collect();
    let seller_names: HashSet<&str> = snapshot.sellers.iter().map(|s| s.name.as_str()).collect();

    check_duplicates("references", snapshot.references.iter().map(|r| r.id.as_str()), &mut issues);
    check_duplicates("clients", snapshot.clients.iter().map(|c| c.id.as_str()), &mut issues);
    check_duplicates("sellers", snapshot.sellers.iter().map(|s| s.id.as_str()), &mut issues);
    check_duplicates("correrias", snapshot.correrias.iter().map(|c| c.id.as_str()), &mut issues);
    check_duplicates("receptions", snapshot.receptions.iter().map(|r| r.id.as_str()), &mut issues);
    check_duplicates("dispatches", snapshot.dispatches.iter().map(|d| d.id.as_str()), &mut issues);
    check_duplicates("orders", snapshot.orders.iter().map(|o| o.id.as_str()), &mut issues);

    for reference in &snapshot.references {
        if let Err(msg) = validate_reference_id(&reference.id) {
            issues.push(SnapshotIssue::new("references", &reference.id, msg));
        }
        if let Err(msg) = validate_amount(reference.price) {
            issues.push(SnapshotIssue::new("references", &reference.id, msg));
        }
        for composition in reference.compositions() {
            if let Err(msg) = validate_cloth_average(composition.average) {
                issues.push(SnapshotIssue::new(
                    "references",
                    &reference.id,
                    format!("{} ({})", msg, composition.name),
                ));
            }
        }
    }

    for client in &snapshot.clients {
        match &client.seller_id {
            Some(id) if !seller_ids.contains(id.as_str()) => issues.push(SnapshotIssue::new(
                "clients",
                &client.id,
                format!("Unknown seller id {}", id),
            )),
            None if !seller_names.contains(client.seller.as_str()) => {
                issues.push(SnapshotIssue::new(
                    "clients",
                    &client.id,
                    format!("No seller named {}", client.seller),
                ))
            }
            _ => {}
        }
    }

    for correria in &snapshot.correrias {
        if let Err(msg) = validate_correria_year(&correria.year) {
            issues.push(SnapshotIssue::new("correrias", &correria.id, msg));
        }
    }

    for reception in &snapshot.receptions {
        check_items("receptions", &reception.id, &reception.items, &references, &mut issues);
    }

    for dispatch in &snapshot.dispatches {
        check_items("dispatches", &dispatch.id, &dispatch.items, &references, &mut issues);
        if !clients.contains(dispatch.client_id.as_str()) {
            issues.push(SnapshotIssue::new(
                "dispatches",
                &dispatch.id,
                format!("Unknown client {}", dispatch.client_id),
            ));
        }
        if let Some(correria_id) = &dispatch.correria_id {
            if !correrias.contains(correria_id.as_str()) {
                issues.push(SnapshotIssue::new(
                    "dispatches",
                    &dispatch.id,
                    format!("Unknown correria {}", correria_id),
                ));
            }
        }
    }

    for order in &snapshot.orders {
        check_items("orders", &order.id, &order.items, &references, &mut issues);
        if !clients.contains(order.client_id.as_str()) {
            issues.push(SnapshotIssue::new(
                "orders",
                &order.id,
                format!("Unknown client {}", order.client_id),
            ));
        }
        if !seller_ids.contains(order.seller_id.as_str()) {
            issues.push(SnapshotIssue::new(
                "orders",
                &order.id,
                format!("Unknown seller {}", order.seller_id),
            ));
        }
        if !correrias.contains(order.correria_id.as_str()) {
            issues.push(SnapshotIssue::new(
                "orders",
                &order.id,
                format!("Unknown correria {}", order.correria_id),
            ));
        }
        if let Err(msg) = validate_amount(order.total_value) {
            issues.push(SnapshotIssue::new("orders", &order.id, msg));
        }
    }

    for production in &snapshot.production {
        let id = format!("{}/{}", production.ref_id, production.correria_id);
        if let Err(msg) = validate_production(production.programmed, production.cut) {
            issues.push(SnapshotIssue::new("production", &id, msg));
        }
        if !references.contains(production.ref_id.as_str()) {
            issues.push(SnapshotIssue::new(
                "production",
                &id,
                format!("Unknown reference {}", production.ref_id),
            ));
        }
    }

    issues
}
