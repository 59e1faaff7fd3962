//! Tarif schema - a priced catalog item
//!
//! Tarifs are owned by the catalog store; the engine only reads them.

use serde::{Deserialize, Serialize};

/// A priced item: unit price plus the billable duration of one unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tarif {
    /// Unique identifier
    pub id: String,

    /// Human-readable label
    pub libelle: String,

    /// Unit price, non-negative
    #[serde(default)]
    pub prix: f64,

    /// Billable duration of one unit, "HH:MM"
    #[serde(default = "default_duration")]
    pub time_by_units: String,

    /// Unit label (e.g. "km", "h")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,

    /// Category tag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Default flag; at most one tarif should carry it
    #[serde(default)]
    pub default: bool,

    /// Free-text comment, used as the seeded line-item detail
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

fn default_duration() -> String {
    "00:00".to_string()
}

impl Tarif {
    /// Create a tarif with the given id, label and unit price
    pub fn new(id: String, libelle: String, prix: f64) -> Self {
        Tarif {
            id,
            libelle,
            prix,
            time_by_units: default_duration(),
            unit: None,
            category: None,
            default: false,
            comment: None,
        }
    }

    /// Return a new tarif with the given unit duration
    pub fn with_duration(mut self, time_by_units: impl Into<String>) -> Self {
        self.time_by_units = time_by_units.into();
        self
    }

    /// Return a new tarif with the default flag set
    pub fn with_default(mut self, default: bool) -> Self {
        self.default = default;
        self
    }

    /// Return a new tarif with the given comment
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tarif_defaults() {
        let tarif = Tarif::new("t-001".to_string(), "Transport".to_string(), 10.0);
        assert_eq!(tarif.time_by_units, "00:00");
        assert!(!tarif.default);
        assert!(tarif.unit.is_none());
    }

    #[test]
    fn test_tarif_json_round_trip() {
        let tarif = Tarif::new("t-001".to_string(), "Transport".to_string(), 12.5)
            .with_duration("01:30")
            .with_default(true)
            .with_comment("par km");

        let json = serde_json::to_string_pretty(&tarif).unwrap();
        let parsed: Tarif = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, tarif);
    }

    #[test]
    fn test_tarif_minimal_json() {
        let json = r#"{"id": "t-001", "libelle": "Transport"}"#;
        let parsed: Tarif = serde_json::from_str(json).unwrap();

        assert_eq!(parsed.prix, 0.0);
        assert_eq!(parsed.time_by_units, "00:00");
        assert!(!parsed.default);
    }

    #[test]
    fn test_tarif_skips_none_in_serialization() {
        let tarif = Tarif::new("t-001".to_string(), "Transport".to_string(), 10.0);
        let json = serde_json::to_string(&tarif).unwrap();

        assert!(!json.contains("\"unit\":"));
        assert!(!json.contains("\"category\":"));
        assert!(!json.contains("\"comment\":"));
    }
}
