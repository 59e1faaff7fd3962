//! List command - List propals with their effective stage

use std::path::Path;
use std::str::FromStr;

use chrono::Utc;
use serde_json::json;

use crate::errors::{PropalError, Result};
use crate::schemas::RawStatus;

use super::open_service;

/// List every propal, newest devis number first.
///
/// `state` filters on the stored status, not the effective stage: a propal
/// stored as Sent still matches `--state sent` even when it displays as Lost.
pub async fn run(cwd: Option<&Path>, json_output: bool, state: Option<&str>) -> Result<()> {
    let service = open_service(cwd)?;
    let now = Utc::now();

    let filter = state
        .map(RawStatus::from_str)
        .transpose()
        .map_err(PropalError::ConfigError)?;

    let mut views = service.views(now)?;
    if let Some(wanted) = filter {
        views.retain(|v| v.propal.statut == wanted);
    }
    views.sort_by(|a, b| b.propal.devis_number.cmp(&a.propal.devis_number));

    if json_output {
        let items: Vec<_> = views
            .iter()
            .map(|v| {
                json!({
                    "id": v.propal.id,
                    "devis_number": v.propal.devis_number,
                    "client": v.client_name,
                    "date_heure": v.propal.date_heure.to_rfc3339(),
                    "statut": v.propal.statut.to_string(),
                    "stage": v.effective.to_string(),
                    "stage_id": v.effective.id(),
                    "duree": v.duree,
                    "montant": v.montant,
                })
            })
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&items).map_err(|e| PropalError::InvalidJson(e.to_string()))?
        );
        return Ok(());
    }

    if views.is_empty() {
        println!("No propals found.");
        return Ok(());
    }

    println!(
        "{:<6} {:<20} {:<12} {:<10} {:>8} {:>10}",
        "DEVIS", "CLIENT", "STAGE", "DATE", "DUREE", "MONTANT"
    );
    for v in &views {
        println!(
            "{:<6} {:<20} {:<12} {:<10} {:>8} {:>10}",
            v.propal.devis_number,
            v.client_name,
            v.effective.to_string(),
            v.propal.date_heure.format("%Y-%m-%d"),
            v.duree,
            v.montant,
        );
    }
    Ok(())
}
