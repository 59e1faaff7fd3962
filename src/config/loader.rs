//! Configuration loading with defaults

use std::path::Path;

use crate::errors::Result;
use crate::fs;
use crate::schemas::Config;

/// Load configuration from the data root, falling back to defaults.
///
/// If config.json exists, it will be read and merged with defaults.
/// If it doesn't exist, default configuration is returned.
pub fn load_config(root: &Path) -> Result<Config> {
    fs::read_config(root)
}
