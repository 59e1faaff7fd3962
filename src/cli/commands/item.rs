//! Item command - Set or clear a line item on a propal

use std::path::Path;

use tracing::info;

use crate::errors::Result;

use super::open_service;

/// Set one line item's quantity and detail, then print the recomputed
/// totals. A zero quantity clears the entry.
pub async fn run(
    cwd: Option<&Path>,
    id: &str,
    tarif: &str,
    qtt: f64,
    detail: Option<String>,
) -> Result<()> {
    let service = open_service(cwd)?;
    let propal = service.set_line_item(id, tarif, qtt, detail)?;

    if propal.id_tarifs.contains_key(tarif) {
        info!("Set item {} x{} on propal {}", tarif, qtt, id);
    } else {
        info!("Removed item {} from propal {}", tarif, id);
    }
    println!(
        "Propal {}: {} item(s), duree {}, montant {:.2}",
        propal.id,
        propal.id_tarifs.len(),
        propal.duree,
        propal.montant
    );
    Ok(())
}
