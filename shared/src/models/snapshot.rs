//! The application state snapshot handed to the reporting engine

use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{
    BatchReception, Client, Correria, Dispatch, LineItem, Order, Production, Reference, Seller,
    User, UserRole,
};

/// Errors raised while decoding a stored snapshot document
#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("Malformed snapshot document: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Immutable snapshot of every entity log
///
/// Reports are always computed from a snapshot value passed in by the caller;
/// the engine keeps no state of its own between queries.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct AppSnapshot {
    pub users: Vec<User>,
    pub references: Vec<Reference>,
    pub clients: Vec<Client>,
    pub sellers: Vec<Seller>,
    pub correrias: Vec<Correria>,
    pub receptions: Vec<BatchReception>,
    pub dispatches: Vec<Dispatch>,
    pub orders: Vec<Order>,
    pub production: Vec<Production>,
}

/// Stored document shape, where every collection may be absent
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredSnapshot {
    users: Option<Vec<User>>,
    references: Option<Vec<Reference>>,
    clients: Option<Vec<Client>>,
    sellers: Option<Vec<Seller>>,
    correrias: Option<Vec<Correria>>,
    receptions: Option<Vec<BatchReception>>,
    dispatches: Option<Vec<Dispatch>>,
    orders: Option<Vec<Order>>,
    production: Option<Vec<Production>>,
}

impl AppSnapshot {
    /// Decode a snapshot; absent collections are empty
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Decode a stored document, filling absent collections from the seed
    ///
    /// Collections that are present but empty stay empty.
    pub fn migrate_from_json(json: &str) -> Result<Self, SnapshotError> {
        let stored: StoredSnapshot = serde_json::from_str(json)?;
        let seed = Self::seed();
        Ok(Self {
            users: stored.users.unwrap_or(seed.users),
            references: stored.references.unwrap_or(seed.references),
            clients: stored.clients.unwrap_or(seed.clients),
            sellers: stored.sellers.unwrap_or(seed.sellers),
            correrias: stored.correrias.unwrap_or(seed.correrias),
            receptions: stored.receptions.unwrap_or(seed.receptions),
            dispatches: stored.dispatches.unwrap_or(seed.dispatches),
            orders: stored.orders.unwrap_or(seed.orders),
            production: stored.production.unwrap_or(seed.production),
        })
    }

    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn find_reference(&self, id: &str) -> Option<&Reference> {
        self.references.iter().find(|r| r.id == id)
    }

    pub fn find_client(&self, id: &str) -> Option<&Client> {
        self.clients.iter().find(|c| c.id == id)
    }

    pub fn find_correria(&self, id: &str) -> Option<&Correria> {
        self.correrias.iter().find(|c| c.id == id)
    }

    /// Demonstration data used when no stored document exists
    pub fn seed() -> Self {
        Self {
            users: vec![
                User {
                    id: "1".into(),
                    name: "Admin Principal".into(),
                    login_code: "ADM".into(),
                    role: UserRole::Admin,
                },
                User {
                    id: "2".into(),
                    name: "Jhon Montoya".into(),
                    login_code: "JAM".into(),
                    role: UserRole::General,
                },
            ],
            // The first two records share an id in the shipped data set
            sellers: vec![
                Seller::new("s1", "Lina Pulgarin"),
                Seller::new("s1", "John Bolivar"),
                Seller::new("s2", "Raul gonzalez"),
            ],
            correrias: vec![
                Correria {
                    id: "c1".into(),
                    name: "Madres".into(),
                    year: "2025".into(),
                },
                Correria {
                    id: "c2".into(),
                    name: "Madres".into(),
                    year: "2026".into(),
                },
            ],
            references: vec![
                Reference {
                    id: "10210".into(),
                    description: "blusa dama".into(),
                    price: Decimal::from(19900),
                    designer: "Martha Ramirez".into(),
                    cloth1: "Lino Milan".into(),
                    avg_cloth1: Decimal::new(85, 2),
                    cloth2: Some("Encaje".into()),
                    avg_cloth2: Some(Decimal::new(15, 2)),
                },
                Reference {
                    id: "12877".into(),
                    description: "blusa dama".into(),
                    price: Decimal::from(21900),
                    designer: "Jackeline Perea".into(),
                    cloth1: "Burda".into(),
                    avg_cloth1: Decimal::new(90, 2),
                    cloth2: None,
                    avg_cloth2: None,
                },
                Reference {
                    id: "12871".into(),
                    description: "buso dama".into(),
                    price: Decimal::from(25900),
                    designer: "Isabel Montoya".into(),
                    cloth1: "Lycra algodon".into(),
                    avg_cloth1: Decimal::new(12, 1),
                    cloth2: None,
                    avg_cloth2: None,
                },
            ],
            clients: vec![
                Client {
                    id: "211".into(),
                    name: "Media naranja".into(),
                    address: "cll 77 a 45 a 30".into(),
                    city: "Medellín".into(),
                    seller: "John Bolivar".into(),
                    seller_id: None,
                },
                Client {
                    id: "212".into(),
                    name: "La pantaleta".into(),
                    address: "cll 83 # 57 a 14".into(),
                    city: "Montería".into(),
                    seller: "Lina Pulgarin".into(),
                    seller_id: None,
                },
            ],
            receptions: Vec::new(),
            dispatches: Vec::new(),
            orders: vec![Order {
                id: "o1".into(),
                client_id: "211".into(),
                seller_id: "s1".into(),
                correria_id: "c1".into(),
                items: vec![LineItem::new("10210", "M", 50)],
                total_value: Decimal::from(995000),
                created_at: Utc.with_ymd_and_hms(2025, 3, 1, 10, 0, 0).single(),
                settled_by: "Admin Principal".into(),
            }],
            production: vec![Production {
                ref_id: "10210".into(),
                correria_id: "c1".into(),
                programmed: 100,
                cut: 40,
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_collections_decode_empty() {
        let snapshot = AppSnapshot::from_json(r#"{"references": []}"#).unwrap();
        assert!(snapshot.orders.is_empty());
        assert!(snapshot.sellers.is_empty());
    }

    #[test]
    fn test_migration_fills_absent_collections_from_seed() {
        let snapshot = AppSnapshot::migrate_from_json(r#"{"orders": [], "receptions": []}"#).unwrap();
        assert!(snapshot.orders.is_empty());
        assert_eq!(snapshot.sellers.len(), 3);
        assert_eq!(snapshot.correrias.len(), 2);
        assert_eq!(snapshot.production.len(), 1);
    }

    #[test]
    fn test_decode_stored_document() {
        let json = r#"{
            "references": [
                {"id": "10210", "description": "blusa dama", "price": 19900, "designer": "Martha Ramirez",
                 "cloth1": "Lino Milan", "avgCloth1": 0.85, "cloth2": "Encaje", "avgCloth2": 0.15}
            ],
            "orders": [
                {"id": "o1", "clientId": "211", "sellerId": "s1", "correriaId": "c1",
                 "items": [{"reference": "10210", "size": "M", "quantity": 50}],
                 "totalValue": 995000, "createdAt": "01/03/2025, 10:00:00 AM", "settledBy": "Admin Principal"}
            ],
            "dispatches": [
                {"id": "d1", "clientId": "211", "items": [{"reference": "10210", "size": "M", "quantity": 20}]}
            ]
        }"#;

        let snapshot = AppSnapshot::from_json(json).unwrap();
        assert_eq!(snapshot.references[0].avg_cloth2, Some(Decimal::new(15, 2)));
        assert_eq!(snapshot.orders[0].total_units(), 50);
        assert!(snapshot.orders[0].created_at.is_some());
        assert_eq!(snapshot.dispatches[0].correria_id, None);
    }

    #[test]
    fn test_locale_timestamps_never_reject_document() {
        let json = "{\"orders\": [
            {\"id\": \"o1\", \"clientId\": \"211\", \"sellerId\": \"s1\", \"correriaId\": \"c1\",
             \"items\": [{\"reference\": \"10210\", \"size\": \"M\", \"quantity\": 50}],
             \"totalValue\": 995000, \"createdAt\": \"1/3/2025, 10:00:00 a.\u{a0}m.\"},
            {\"id\": \"o2\", \"clientId\": \"211\", \"sellerId\": \"s1\", \"correriaId\": \"c1\",
             \"items\": [{\"reference\": \"10210\", \"size\": \"S\", \"quantity\": 5}],
             \"totalValue\": 99500, \"createdAt\": \"sábado, 1 de marzo\"}
        ]}";

        let snapshot = AppSnapshot::from_json(json).unwrap();
        assert!(snapshot.orders[0].created_at.is_some());
        assert!(snapshot.orders[1].created_at.is_none());
        assert_eq!(snapshot.orders[1].total_units(), 5);

        let migrated = AppSnapshot::migrate_from_json(json).unwrap();
        assert_eq!(migrated.orders.len(), 2);
    }

    #[test]
    fn test_malformed_document() {
        let err = AppSnapshot::from_json("{not json").unwrap_err();
        assert!(err.to_string().starts_with("Malformed snapshot document"));
    }

    #[test]
    fn test_json_round_trip_preserves_seed() {
        let seed = AppSnapshot::seed();
        let decoded = AppSnapshot::from_json(&seed.to_json().unwrap()).unwrap();
        assert_eq!(decoded, seed);
    }
}
