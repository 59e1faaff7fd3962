//! Tarifs command - List the tarif catalog

use std::path::Path;

use serde_json::json;

use crate::config::load_config;
use crate::errors::{PropalError, Result};
use crate::fs::{self, find_data_root, resolve_cwd};

/// List the tenant's tarif catalog
pub async fn run(cwd: Option<&Path>, json_output: bool) -> Result<()> {
    let root = find_data_root(&resolve_cwd(cwd))?;
    let config = load_config(&root)?;
    let mut tarifs = fs::read_tarifs(&root, &config.tenant)?;
    tarifs.sort_by(|a, b| a.libelle.cmp(&b.libelle));

    if json_output {
        let items: Vec<_> = tarifs
            .iter()
            .map(|t| {
                json!({
                    "id": t.id,
                    "libelle": t.libelle,
                    "prix": t.prix,
                    "time_by_units": t.time_by_units,
                    "default": t.default,
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

    if tarifs.is_empty() {
        println!("No tarifs found.");
        return Ok(());
    }

    println!("{:<20} {:<25} {:>10} {:>8} {:>8}", "ID", "LIBELLE", "PRIX", "TIME", "DEFAULT");
    for t in &tarifs {
        println!(
            "{:<20} {:<25} {:>10.2} {:>8} {:>8}",
            t.id,
            t.libelle,
            t.prix,
            t.time_by_units,
            if t.default { "yes" } else { "" },
        );
    }
    Ok(())
}
