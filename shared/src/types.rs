//! Common types used across the reports

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Parameter value selecting the all-campaigns view
pub const GLOBAL_SCOPE: &str = "global";

/// Campaign scope of an order/dispatch aggregation
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CampaignScope {
    /// Every campaign ("Histórico Global")
    #[default]
    Global,
    /// A single correria, by id
    Campaign(String),
}

impl CampaignScope {
    /// Parse a picker/query value; absent, empty or `"global"` selects every campaign
    pub fn from_param(param: Option<&str>) -> Self {
        match param.map(str::trim) {
            None | Some("") => CampaignScope::Global,
            Some(value) if value.eq_ignore_ascii_case(GLOBAL_SCOPE) => CampaignScope::Global,
            Some(value) => CampaignScope::Campaign(value.to_string()),
        }
    }

    pub fn is_global(&self) -> bool {
        matches!(self, CampaignScope::Global)
    }

    /// Whether a record of campaign `correria_id` falls inside the scope
    pub fn includes(&self, correria_id: &str) -> bool {
        match self {
            CampaignScope::Global => true,
            CampaignScope::Campaign(id) => id == correria_id,
        }
    }

    /// Whether a record with an optional campaign falls inside the scope
    ///
    /// Records without a campaign are only visible globally.
    pub fn includes_optional(&self, correria_id: Option<&str>) -> bool {
        match (self, correria_id) {
            (CampaignScope::Global, _) => true,
            (CampaignScope::Campaign(id), Some(other)) => id == other,
            (CampaignScope::Campaign(_), None) => false,
        }
    }
}

impl std::fmt::Display for CampaignScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CampaignScope::Global => write!(f, "{}", GLOBAL_SCOPE),
            CampaignScope::Campaign(id) => write!(f, "{}", id),
        }
    }
}

impl Serialize for CampaignScope {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CampaignScope {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(CampaignScope::from_param(Some(&raw)))
    }
}

/// Report tabs offered to the presentation layer
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum ReportKind {
    Kardex,
    #[serde(rename = "ref")]
    Reference,
    Client,
    Seller,
    SellerById,
}

impl ReportKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportKind::Kardex => "kardex",
            ReportKind::Reference => "ref",
            ReportKind::Client => "client",
            ReportKind::Seller => "seller",
            ReportKind::SellerById => "seller-by-id",
        }
    }

    /// Whether the report accepts a campaign scope
    pub fn is_scoped(&self) -> bool {
        matches!(
            self,
            ReportKind::Client | ReportKind::Seller | ReportKind::SellerById
        )
    }
}

impl std::fmt::Display for ReportKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ReportKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "kardex" => Ok(ReportKind::Kardex),
            "ref" | "reference" | "references" => Ok(ReportKind::Reference),
            "client" | "clients" => Ok(ReportKind::Client),
            "seller" | "sellers" => Ok(ReportKind::Seller),
            "seller-by-id" | "sellers-by-id" => Ok(ReportKind::SellerById),
            other => Err(format!("Unknown report: {}", other)),
        }
    }
}

/// Entry of a campaign picker
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CampaignOption {
    pub value: CampaignScope,
    pub label: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_from_param() {
        assert_eq!(CampaignScope::from_param(None), CampaignScope::Global);
        assert_eq!(CampaignScope::from_param(Some("")), CampaignScope::Global);
        assert_eq!(CampaignScope::from_param(Some("GLOBAL")), CampaignScope::Global);
        assert_eq!(
            CampaignScope::from_param(Some("c1")),
            CampaignScope::Campaign("c1".into())
        );
    }

    #[test]
    fn test_scope_includes() {
        let c1 = CampaignScope::Campaign("c1".into());
        assert!(c1.includes("c1"));
        assert!(!c1.includes("c2"));
        assert!(CampaignScope::Global.includes("c2"));

        assert!(CampaignScope::Global.includes_optional(None));
        assert!(!c1.includes_optional(None));
        assert!(c1.includes_optional(Some("c1")));
    }

    #[test]
    fn test_report_kind_parse() {
        assert_eq!("kardex".parse::<ReportKind>(), Ok(ReportKind::Kardex));
        assert_eq!("ref".parse::<ReportKind>(), Ok(ReportKind::Reference));
        assert_eq!("Sellers".parse::<ReportKind>(), Ok(ReportKind::Seller));
        assert_eq!("seller-by-id".parse::<ReportKind>(), Ok(ReportKind::SellerById));
        assert!("production".parse::<ReportKind>().is_err());
    }

    #[test]
    fn test_scope_serializes_as_string() {
        let json = serde_json::to_string(&CampaignScope::Campaign("c2".into())).unwrap();
        assert_eq!(json, "\"c2\"");
        let global: CampaignScope = serde_json::from_str("\"global\"").unwrap();
        assert!(global.is_global());
    }
}
