//! Clients command - List the client records

use std::path::Path;

use serde_json::json;

use crate::config::load_config;
use crate::errors::{PropalError, Result};
use crate::fs::{self, find_data_root, resolve_cwd};

/// List the tenant's client records
pub async fn run(cwd: Option<&Path>, json_output: bool) -> Result<()> {
    let root = find_data_root(&resolve_cwd(cwd))?;
    let config = load_config(&root)?;
    let mut clients = fs::read_clients(&root, &config.tenant)?;
    clients.sort_by(|a, b| a.nom.cmp(&b.nom));

    if json_output {
        let items: Vec<_> = clients
            .iter()
            .map(|c| {
                json!({
                    "id": c.id,
                    "nom": c.nom,
                    "prenom": c.prenom,
                    "distance": c.distance,
                    "comment": c.comment,
                })
            })
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&items)
                .map_err(|e| PropalError::InvalidJson(e.to_string()))?
        );
        return Ok(());
    }

    if clients.is_empty() {
        println!("No clients found.");
        return Ok(());
    }

    println!("{:<20} {:<25} {:>10}", "ID", "NAME", "DISTANCE");
    for c in &clients {
        let distance = c
            .distance
            .map(|d| format!("{:.1}", d))
            .unwrap_or_else(|| "-".to_string());
        println!("{:<20} {:<25} {:>10}", c.id, c.display_name(), distance);
    }
    Ok(())
}
