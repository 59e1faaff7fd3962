//! Notify command - Fire the notify control at the current stage

use std::path::Path;

use chrono::Utc;
use tracing::info;

use crate::errors::Result;

use super::open_service;

/// Fire the notify control: send the stage's notification and persist the
/// resulting status (Draft to Sent, Done to ToPay, Remind resends).
pub async fn run(cwd: Option<&Path>, id: &str) -> Result<()> {
    let service = open_service(cwd)?;
    let propal = service.notify(id, Utc::now())?;

    info!("Notified propal {}, now {}", id, propal.statut);
    println!("Propal {} is now {}", propal.id, propal.statut);
    Ok(())
}
