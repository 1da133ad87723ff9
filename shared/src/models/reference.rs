//! Garment reference (catalogue) models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A garment reference in the catalogue
///
/// References are a lookup dimension only: receptions, dispatches and orders
/// point at them by `id`, and nothing in the reporting engine mutates them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Reference {
    /// Upper-case reference code (e.g., "10210")
    pub id: String,
    pub description: String,
    /// Unit sale price
    pub price: Decimal,
    pub designer: String,
    /// Main cloth
    pub cloth1: String,
    /// Average meters of the main cloth per garment
    pub avg_cloth1: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloth2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_cloth2: Option<Decimal>,
}

/// One cloth used to cut a reference
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClothComposition {
    pub name: String,
    pub average: Decimal,
}

impl Reference {
    /// Cloth compositions of this reference (one or two)
    ///
    /// A secondary cloth without a yield is reported with a zero average.
    pub fn compositions(&self) -> Vec<ClothComposition> {
        let mut compositions = vec![ClothComposition {
            name: self.cloth1.clone(),
            average: self.avg_cloth1,
        }];
        if let Some(name) = &self.cloth2 {
            compositions.push(ClothComposition {
                name: name.clone(),
                average: self.avg_cloth2.unwrap_or(Decimal::ZERO),
            });
        }
        compositions
    }
}
