//! Init command - Initialize a propal data root

use std::path::Path;

use tracing::info;

use crate::errors::{PropalError, Result};
use crate::fs::{self, get_propal_dir, resolve_cwd};
use crate::schemas::Config;

/// Initialize a propal data root in the given directory
pub async fn run(cwd: Option<&Path>, force: bool) -> Result<()> {
    let root = resolve_cwd(cwd);
    let propal_dir = get_propal_dir(&root);

    if propal_dir.exists() && !force {
        return Err(PropalError::ConfigError(format!(
            "{} already exists (use --force to reinitialize)",
            propal_dir.display()
        )));
    }

    std::fs::create_dir_all(&propal_dir)?;
    let config = Config::default();
    fs::write_config(&root, &config)?;

    // Seed the tenant's stores so the layout is visible on disk
    fs::write_clients(&root, &config.tenant, &[])?;
    fs::write_tarifs(&root, &config.tenant, &[])?;
    fs::write_propals(&root, &config.tenant, &[])?;

    info!("Initialized propal data root at {}", propal_dir.display());
    println!("Initialized {}", propal_dir.display());
    Ok(())
}
