//! Advance command - Toggle the advance checkbox at the current stage

use std::path::Path;

use chrono::Utc;
use tracing::info;

use crate::errors::Result;

use super::open_service;

/// Apply the advance checkbox. Checked walks the forward edge (Sent to Won,
/// ToPay to Paid); `--uncheck` walks the back-edge where one exists.
pub async fn run(cwd: Option<&Path>, id: &str, uncheck: bool) -> Result<()> {
    let service = open_service(cwd)?;
    let propal = service.advance(id, !uncheck, Utc::now())?;

    info!("Propal {} now {}", id, propal.statut);
    println!("Propal {} is now {}", propal.id, propal.statut);
    Ok(())
}
