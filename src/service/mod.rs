//! Proposal orchestration
//!
//! Composes the stage resolver, capability table and aggregator per propal,
//! and delegates persistence to the JSON stores. Every method works on a
//! copy of the loaded snapshot: if the store write fails, no in-memory state
//! is considered changed and the error propagates to the caller.

mod notify;

pub use notify::{LogNotifier, Notifier};

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use rand::Rng;
use tracing::{debug, warn};

use crate::domain::{
    aggregate, apply_advance, apply_notify, capabilities, default_line_items, find_tarif,
    format_amount, resolve_effective_stage, EffectiveStage, StageControls,
};
use crate::errors::{PropalError, Result};
use crate::fs;
use crate::schemas::{Client, Propal, Tarif};

/// Alphabet for opaque record ids, URL-friendly
const ID_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-";

/// Length of generated record ids
const ID_LENGTH: usize = 18;

/// Generate an opaque record id
pub fn generate_id() -> String {
    let mut rng = rand::thread_rng();
    (0..ID_LENGTH)
        .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
        .collect()
}

/// Next sequential devis number: max existing + 1, zero-padded to 4 digits.
/// Unparsable existing numbers count as zero.
pub fn next_devis_number(existing: &[Propal]) -> String {
    let max = existing
        .iter()
        .filter_map(|p| p.devis_number.trim().parse::<u32>().ok())
        .max()
        .unwrap_or(0);
    format!("{:04}", max + 1)
}

/// One propal prepared for display: effective stage and totals are computed
/// at read time, never cached.
#[derive(Debug, Clone)]
pub struct PropalView {
    pub propal: Propal,
    pub client_name: String,
    pub effective: EffectiveStage,
    pub controls: StageControls,
    pub duree: String,
    pub montant: String,
}

/// Orchestrates propal reads and mutations for one tenant's data set
pub struct ProposalService {
    root: PathBuf,
    tenant: String,
    notifier: Box<dyn Notifier>,
}

impl ProposalService {
    /// Create a service with the default logging notifier
    pub fn new(root: PathBuf, tenant: impl Into<String>) -> Self {
        Self::with_notifier(root, tenant, Box::new(LogNotifier))
    }

    /// Create a service with a custom notification sender
    pub fn with_notifier(
        root: PathBuf,
        tenant: impl Into<String>,
        notifier: Box<dyn Notifier>,
    ) -> Self {
        ProposalService {
            root,
            tenant: tenant.into(),
            notifier,
        }
    }

    fn propals(&self) -> Result<Vec<Propal>> {
        fs::read_propals(&self.root, &self.tenant)
    }

    fn tarifs(&self) -> Result<Vec<Tarif>> {
        fs::read_tarifs(&self.root, &self.tenant)
    }

    fn clients(&self) -> Result<Vec<Client>> {
        fs::read_clients(&self.root, &self.tenant)
    }

    /// Replace the propal store. A failed write means the mutation did not
    /// commit; callers must not treat their in-memory copy as applied.
    fn save(&self, propals: &[Propal]) -> Result<()> {
        fs::write_propals(&self.root, &self.tenant, propals)
            .map_err(|e| PropalError::Persistence(e.to_string()))
    }

    /// Get one propal by id
    pub fn get(&self, id: &str) -> Result<Propal> {
        self.propals()?
            .into_iter()
            .find(|p| p.id == id)
            .ok_or_else(|| PropalError::RecordNotFound(format!("propal {}", id)))
    }

    /// Create a new propal for a client.
    ///
    /// Assigns the next devis number, status Draft and an empty line-item
    /// map; when the client exists and a default tarif is flagged, the map
    /// is seeded with a single entry (quantity = client distance or 1) and
    /// the totals are computed immediately.
    pub fn create(&self, id_client: &str, date_heure: DateTime<Utc>) -> Result<Propal> {
        let mut propals = self.propals()?;
        let devis_number = next_devis_number(&propals);
        let mut propal =
            Propal::new(generate_id(), devis_number, id_client.to_string(), date_heure);

        let clients = self.clients()?;
        if let Some(client) = clients.iter().find(|c| c.id == id_client) {
            let catalog = self.tarifs()?;
            if let Some(items) = default_line_items(&catalog, client) {
                let agg = aggregate(&items, &catalog);
                propal = propal.with_line_items(agg.pruned, agg.duree, agg.montant);
            }
        } else {
            debug!("Client {} not found, creating propal without seeding", id_client);
        }

        propals.push(propal.clone());
        self.save(&propals)?;
        Ok(propal)
    }

    /// Set or clear one line item, then recompute and persist the totals.
    ///
    /// A zero or negative quantity removes the entry. Inserting requires the
    /// tarif to exist in the catalog; stale references already in the map are
    /// pruned as part of the aggregation and the pruned map is what gets
    /// persisted.
    pub fn set_line_item(
        &self,
        id: &str,
        tarif_id: &str,
        qtt: f64,
        detail: Option<String>,
    ) -> Result<Propal> {
        let mut propals = self.propals()?;
        let catalog = self.tarifs()?;
        if qtt > 0.0 && find_tarif(&catalog, tarif_id).is_none() {
            return Err(PropalError::RecordNotFound(format!("tarif {}", tarif_id)));
        }
        let propal = propals
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| PropalError::RecordNotFound(format!("propal {}", id)))?;

        let mut items = propal.id_tarifs.clone();
        crate::domain::update_line_item(&mut items, &catalog, tarif_id, qtt, detail);

        let agg = aggregate(&items, &catalog);
        propal.id_tarifs = agg.pruned;
        propal.duree = agg.duree;
        propal.montant = agg.montant;
        let updated = propal.clone();

        self.save(&propals)?;
        Ok(updated)
    }

    /// Apply the advance checkbox and persist the new status.
    ///
    /// Only the status string is written; totals are independent of status
    /// and are not recomputed.
    pub fn advance(&self, id: &str, checked: bool, now: DateTime<Utc>) -> Result<Propal> {
        let mut propals = self.propals()?;
        let propal = propals
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| PropalError::RecordNotFound(format!("propal {}", id)))?;

        let next = apply_advance(propal.statut, propal.date_heure, now, checked)?;
        propal.statut = next;
        let updated = propal.clone();

        self.save(&propals)?;
        Ok(updated)
    }

    /// Fire the notify control: send the notification, then persist the new
    /// status.
    ///
    /// The send itself is fire-and-forget; a sender failure is logged and
    /// the outcome reported to the caller is that of the status write.
    pub fn notify(&self, id: &str, now: DateTime<Utc>) -> Result<Propal> {
        let mut propals = self.propals()?;
        let propal = propals
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| PropalError::RecordNotFound(format!("propal {}", id)))?;

        let next = apply_notify(propal.statut, propal.date_heure, now)?;
        let stage = resolve_effective_stage(propal.statut, propal.date_heure, now);
        if let Err(e) = self.notifier.send(propal, stage) {
            warn!("Notification send failed for propal {}: {}", id, e);
        }

        propal.statut = next;
        let updated = propal.clone();

        self.save(&propals)?;
        Ok(updated)
    }

    /// Delete a propal record entirely
    pub fn delete(&self, id: &str) -> Result<()> {
        let mut propals = self.propals()?;
        let before = propals.len();
        propals.retain(|p| p.id != id);
        if propals.len() == before {
            return Err(PropalError::RecordNotFound(format!("propal {}", id)));
        }
        self.save(&propals)
    }

    /// Load one propal prepared for display
    pub fn view(&self, id: &str, now: DateTime<Utc>) -> Result<PropalView> {
        let propal = self.get(id)?;
        let catalog = self.tarifs()?;
        let clients = self.clients()?;
        Ok(self.build_view(propal, &catalog, &clients, now))
    }

    /// Load every propal prepared for display.
    ///
    /// The effective stage is computed against `now` on every call; when a
    /// propal has line items the totals are recomputed live from the
    /// catalog, otherwise the cached values are shown.
    pub fn views(&self, now: DateTime<Utc>) -> Result<Vec<PropalView>> {
        let catalog = self.tarifs()?;
        let clients = self.clients()?;
        Ok(self
            .propals()?
            .into_iter()
            .map(|p| self.build_view(p, &catalog, &clients, now))
            .collect())
    }

    fn build_view(
        &self,
        propal: Propal,
        catalog: &[Tarif],
        clients: &[Client],
        now: DateTime<Utc>,
    ) -> PropalView {
        let effective = resolve_effective_stage(propal.statut, propal.date_heure, now);
        let controls = capabilities(effective, propal.statut);

        let (duree, montant) = if !propal.id_tarifs.is_empty() && !catalog.is_empty() {
            let agg = aggregate(&propal.id_tarifs, catalog);
            (agg.duree, format_amount(agg.montant))
        } else {
            (propal.duree.clone(), format_amount(propal.montant))
        };

        let client_name = clients
            .iter()
            .find(|c| c.id == propal.id_client)
            .map(Client::display_name)
            .unwrap_or_else(|| propal.id_client.clone());

        PropalView {
            propal,
            client_name,
            effective,
            controls,
            duree,
            montant,
        }
    }
}
