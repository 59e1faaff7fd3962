//! Propal schema - a commercial proposal tracked from draft to paid invoice
//!
//! The persisted status vocabulary is string-typed and decoded leniently:
//! legacy data files carry French labels (BROUILLON, ENVOYEE, GAGNEE, ...)
//! and anything unrecognized decodes as Draft.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Persisted lifecycle status. Lost and Remind are display overlays and are
/// never part of this vocabulary; see `domain::EffectiveStage`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RawStatus {
    Draft,
    Sent,
    Won,
    Done,
    ToPay,
    Paid,
}

impl RawStatus {
    /// Numeric stage id used for ordering and display
    pub fn stage_id(self) -> u8 {
        match self {
            RawStatus::Draft => 0,
            RawStatus::Sent => 1,
            RawStatus::Won => 3,
            RawStatus::Done => 4,
            RawStatus::ToPay => 6,
            RawStatus::Paid => 9,
        }
    }

    /// Decode a persisted status string, falling back to Draft.
    ///
    /// Matching is case-insensitive and accepts both the snake_case
    /// vocabulary and the legacy French labels. An unrecognized or empty
    /// value is treated as Draft; the original mapping layer did the same.
    pub fn parse_lenient(s: &str) -> Self {
        let s = s.to_uppercase();
        if s.contains("BROUILLON") || s.contains("DRAFT") {
            RawStatus::Draft
        } else if s.contains("ENVOY") || s.contains("SENT") {
            RawStatus::Sent
        } else if s.contains("GAGN") || s.contains("WON") {
            RawStatus::Won
        } else if s.contains("EFFECTU") || s.contains("DONE") {
            RawStatus::Done
        } else if s.contains("PAYER") || s.contains("TO_PAY") {
            RawStatus::ToPay
        } else if s.contains("PAY") || s.contains("PAID") {
            RawStatus::Paid
        } else {
            RawStatus::Draft
        }
    }
}

impl From<String> for RawStatus {
    fn from(s: String) -> Self {
        RawStatus::parse_lenient(&s)
    }
}

impl From<RawStatus> for String {
    fn from(status: RawStatus) -> Self {
        status.to_string()
    }
}

impl std::fmt::Display for RawStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RawStatus::Draft => write!(f, "draft"),
            RawStatus::Sent => write!(f, "sent"),
            RawStatus::Won => write!(f, "won"),
            RawStatus::Done => write!(f, "done"),
            RawStatus::ToPay => write!(f, "to_pay"),
            RawStatus::Paid => write!(f, "paid"),
        }
    }
}

impl std::str::FromStr for RawStatus {
    type Err = String;

    /// Strict parse for user-supplied values (CLI filters). Lenient decoding
    /// of persisted data goes through `parse_lenient`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(RawStatus::Draft),
            "sent" => Ok(RawStatus::Sent),
            "won" => Ok(RawStatus::Won),
            "done" => Ok(RawStatus::Done),
            "to_pay" => Ok(RawStatus::ToPay),
            "paid" => Ok(RawStatus::Paid),
            _ => Err(format!("Unknown status: {}", s)),
        }
    }
}

/// A quantity plus free-text detail attached to one tarif within a propal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Quantity, non-negative
    #[serde(default)]
    pub qtt: f64,

    /// Free-text detail
    #[serde(default)]
    pub detail: String,
}

impl LineItem {
    /// Create a line item
    pub fn new(qtt: f64, detail: impl Into<String>) -> Self {
        LineItem {
            qtt,
            detail: detail.into(),
        }
    }
}

/// Mapping from tarif id to line item. Ordering is irrelevant; BTreeMap keeps
/// serialization deterministic.
pub type LineItemMap = BTreeMap<String, LineItem>;

/// Accept either a native map or a legacy embedded JSON string. An
/// unparsable payload decodes as an empty map rather than failing the read.
fn deserialize_line_items<'de, D>(deserializer: D) -> Result<LineItemMap, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Payload {
        Map(LineItemMap),
        Text(String),
    }

    match Option::<Payload>::deserialize(deserializer)? {
        None => Ok(LineItemMap::new()),
        Some(Payload::Map(map)) => Ok(map),
        Some(Payload::Text(text)) => Ok(serde_json::from_str(&text).unwrap_or_else(|e| {
            tracing::warn!("Malformed line-item payload, treating as empty: {}", e);
            LineItemMap::new()
        })),
    }
}

/// A commercial proposal record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Propal {
    /// Unique identifier
    pub id: String,

    /// Sequential human-readable number, zero-padded, monotonic per tenant
    pub devis_number: String,

    /// Client reference (weak: the client may have been deleted)
    pub id_client: String,

    /// Reference timestamp: the propal's creation/due instant
    pub date_heure: DateTime<Utc>,

    /// Persisted lifecycle status; overlays are derived at read time
    #[serde(default = "default_status")]
    pub statut: RawStatus,

    /// Line items keyed by tarif id
    #[serde(default, deserialize_with = "deserialize_line_items")]
    pub id_tarifs: LineItemMap,

    /// Cached total duration, "HH:MM"; re-derivable from id_tarifs + catalog
    #[serde(default = "default_duration")]
    pub duree: String,

    /// Cached total amount; re-derivable from id_tarifs + catalog
    #[serde(default)]
    pub montant: f64,

    /// Payment method
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode_paiement: Option<String>,

    /// Payment date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_paiement: Option<String>,

    /// Invoice number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoice_number: Option<String>,
}

fn default_status() -> RawStatus {
    RawStatus::Draft
}

fn default_duration() -> String {
    "00:00".to_string()
}

impl Propal {
    /// Create a new propal: status Draft, empty line-item map
    pub fn new(
        id: String,
        devis_number: String,
        id_client: String,
        date_heure: DateTime<Utc>,
    ) -> Self {
        Propal {
            id,
            devis_number,
            id_client,
            date_heure,
            statut: RawStatus::Draft,
            id_tarifs: LineItemMap::new(),
            duree: default_duration(),
            montant: 0.0,
            mode_paiement: None,
            date_paiement: None,
            invoice_number: None,
        }
    }

    /// Return a new propal with the given status
    pub fn with_statut(mut self, statut: RawStatus) -> Self {
        self.statut = statut;
        self
    }

    /// Return a new propal with the given line items and recomputed totals
    pub fn with_line_items(mut self, id_tarifs: LineItemMap, duree: String, montant: f64) -> Self {
        self.id_tarifs = id_tarifs;
        self.duree = duree;
        self.montant = montant;
        self
    }
}
