//! Show command - Show one propal in detail

use std::path::Path;

use chrono::Utc;
use serde_json::json;

use crate::errors::{PropalError, Result};

use super::open_service;

/// Show one propal: identity, effective stage, available controls and the
/// aggregated line items.
pub async fn run(cwd: Option<&Path>, id: &str, json_output: bool) -> Result<()> {
    let service = open_service(cwd)?;
    let now = Utc::now();
    let view = service.view(id, now)?;

    if json_output {
        let items: Vec<_> = view
            .propal
            .id_tarifs
            .iter()
            .map(|(tarif_id, item)| {
                json!({
                    "tarif": tarif_id,
                    "qtt": item.qtt,
                    "detail": item.detail,
                })
            })
            .collect();
        let output = json!({
            "id": view.propal.id,
            "devis_number": view.propal.devis_number,
            "client": view.client_name,
            "date_heure": view.propal.date_heure.to_rfc3339(),
            "statut": view.propal.statut.to_string(),
            "stage": view.effective.to_string(),
            "stage_id": view.effective.id(),
            "can_advance": view.controls.can_advance,
            "can_notify": view.controls.can_notify,
            "duree": view.duree,
            "montant": view.montant,
            "items": items,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&output)
                .map_err(|e| PropalError::InvalidJson(e.to_string()))?
        );
        return Ok(());
    }

    println!("Propal {} (devis {})", view.propal.id, view.propal.devis_number);
    println!("  Client:  {}", view.client_name);
    println!("  Date:    {}", view.propal.date_heure.format("%Y-%m-%d %H:%M"));
    println!("  Statut:  {}", view.propal.statut);
    println!("  Stage:   {}", view.effective);

    let mut controls = Vec::new();
    if view.controls.can_advance {
        controls.push("advance");
    }
    if view.controls.can_notify {
        controls.push("notify");
    }
    if controls.is_empty() {
        println!("  Controls: none");
    } else {
        println!("  Controls: {}", controls.join(", "));
    }

    if !view.propal.id_tarifs.is_empty() {
        println!("  Items:");
        for (tarif_id, item) in &view.propal.id_tarifs {
            if item.detail.is_empty() {
                println!("    {} x{}", tarif_id, item.qtt);
            } else {
                println!("    {} x{} ({})", tarif_id, item.qtt, item.detail);
            }
        }
    }
    println!("  Duree:   {}", view.duree);
    println!("  Montant: {}", view.montant);
    Ok(())
}
