//! Client schema - a customer record
//!
//! Clients are owned by their own store; the engine reads the distance and
//! comment hints when seeding a new propal's default line item.

use serde::{Deserialize, Serialize};

/// A client record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    /// Unique identifier
    pub id: String,

    /// Last name
    pub nom: String,

    /// First name
    #[serde(default)]
    pub prenom: String,

    /// Distance hint in km, used as the default line-item quantity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,

    /// Free-text comment, used as the seeded line-item detail
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl Client {
    /// Create a client with the given id and name
    pub fn new(id: String, nom: String, prenom: String) -> Self {
        Client {
            id,
            nom,
            prenom,
            distance: None,
            comment: None,
        }
    }

    /// Display name, "nom prenom"
    pub fn display_name(&self) -> String {
        if self.prenom.is_empty() {
            self.nom.clone()
        } else {
            format!("{} {}", self.nom, self.prenom)
        }
    }
}
