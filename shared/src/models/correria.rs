//! Sales campaign (correria) and production models

use serde::{Deserialize, Serialize};

/// A sales campaign, e.g. "Madres 2025"
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Correria {
    pub id: String,
    pub name: String,
    pub year: String,
}

impl Correria {
    /// Label shown in campaign pickers
    pub fn label(&self) -> String {
        format!("{} {}", self.name, self.year)
    }
}

/// Production plan of a reference within a correria
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Production {
    pub ref_id: String,
    pub correria_id: String,
    /// Units programmed for cutting
    pub programmed: i64,
    /// Units already cut
    pub cut: i64,
}

impl Production {
    /// Programmed units not yet cut
    pub fn pending_cut(&self) -> i64 {
        (self.programmed - self.cut).max(0)
    }
}
