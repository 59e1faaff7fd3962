//! Delete command - Delete a propal record

use std::path::Path;

use tracing::info;

use crate::errors::Result;

use super::open_service;

/// Delete a propal record entirely
pub async fn run(cwd: Option<&Path>, id: &str) -> Result<()> {
    let service = open_service(cwd)?;
    service.delete(id)?;

    info!("Deleted propal {}", id);
    println!("Deleted propal {}", id);
    Ok(())
}
