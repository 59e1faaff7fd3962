//! Create command - Create a new propal for a client

use std::path::Path;

use chrono::{DateTime, Duration, Utc};
use tracing::info;

use crate::errors::{PropalError, Result};

use super::open_service;

/// Create a new propal for the given client.
///
/// The reference date is the visit date the escalation clock runs against;
/// it defaults to 28 days from now.
pub async fn run(cwd: Option<&Path>, client: &str, date: Option<&str>) -> Result<()> {
    let service = open_service(cwd)?;

    let date_heure = match date {
        Some(raw) => DateTime::parse_from_rfc3339(raw)
            .map_err(|e| PropalError::ConfigError(format!("Invalid date '{}': {}", raw, e)))?
            .with_timezone(&Utc),
        None => Utc::now() + Duration::days(28),
    };

    let propal = service.create(client, date_heure)?;
    info!("Created propal {} for client {}", propal.id, client);
    println!("Created propal {} (devis {})", propal.id, propal.devis_number);
    Ok(())
}
