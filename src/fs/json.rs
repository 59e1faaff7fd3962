//! JSON store operations
//!
//! Record-oriented stores: each read returns the full snapshot (a missing
//! file is an empty store), each write replaces the whole list atomically.

use std::fs;
use std::io::Write;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::{PropalError, Result};
use crate::schemas::{Client, Config, Propal, Tarif};

use super::paths::{get_clients_path, get_config_path, get_propals_path, get_tarifs_path};

/// Read and deserialize a JSON file.
///
/// # Errors
/// * `FileNotFound` - If the file does not exist
/// * `InvalidJson` - If the file contains invalid JSON
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            PropalError::FileNotFound(format!("File not found: {}", path.display()))
        } else {
            PropalError::Io(e)
        }
    })?;

    serde_json::from_str(&content).map_err(|e| {
        PropalError::InvalidJson(format!("Invalid JSON in file {}: {}", path.display(), e))
    })
}

/// Write a value to a JSON file with pretty formatting.
///
/// Uses atomic write (write to temp file, then rename) to avoid partial
/// writes: a transition or aggregation either lands fully or not at all.
pub fn write_json<T: Serialize>(path: &Path, data: &T) -> Result<()> {
    let content =
        serde_json::to_string_pretty(data).map_err(|e| PropalError::InvalidJson(e.to_string()))?;

    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    // Write atomically: write to temp file, then rename
    let temp_path = path.with_extension("json.tmp");
    let mut file = fs::File::create(&temp_path)?;
    file.write_all(content.as_bytes())?;
    file.write_all(b"\n")?;
    file.sync_all()?;
    drop(file);

    fs::rename(&temp_path, path)?;

    Ok(())
}

/// Read a record list, treating a missing file as an empty store.
fn read_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    read_json(path)
}

/// Read the config.json file, or defaults if it doesn't exist.
pub fn read_config(root: &Path) -> Result<Config> {
    let path = get_config_path(root);
    if !path.exists() {
        return Ok(Config::default());
    }
    read_json(&path)
}

/// Write the config.json file.
pub fn write_config(root: &Path, config: &Config) -> Result<()> {
    write_json(&get_config_path(root), config)
}

/// Read the full client snapshot for a tenant.
pub fn read_clients(root: &Path, tenant: &str) -> Result<Vec<Client>> {
    read_records(&get_clients_path(root, tenant))
}

/// Replace the full client list for a tenant.
pub fn write_clients(root: &Path, tenant: &str, clients: &[Client]) -> Result<()> {
    write_json(&get_clients_path(root, tenant), &clients)
}

/// Read the full tarif catalog for a tenant.
pub fn read_tarifs(root: &Path, tenant: &str) -> Result<Vec<Tarif>> {
    read_records(&get_tarifs_path(root, tenant))
}

/// Replace the full tarif catalog for a tenant.
pub fn write_tarifs(root: &Path, tenant: &str, tarifs: &[Tarif]) -> Result<()> {
    write_json(&get_tarifs_path(root, tenant), &tarifs)
}

/// Read the full propal snapshot for a tenant.
pub fn read_propals(root: &Path, tenant: &str) -> Result<Vec<Propal>> {
    read_records(&get_propals_path(root, tenant))
}

/// Replace the full propal list for a tenant.
pub fn write_propals(root: &Path, tenant: &str, propals: &[Propal]) -> Result<()> {
    write_json(&get_propals_path(root, tenant), &propals)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use tempfile::TempDir;

    #[test]
    fn test_read_json_file_not_found() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nonexistent.json");

        let result: Result<Vec<Tarif>> = read_json(&path);
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), PropalError::FileNotFound(_)));
    }

    #[test]
    fn test_read_json_invalid_json() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("invalid.json");
        fs::write(&path, "not valid json {").unwrap();

        let result: Result<Vec<Tarif>> = read_json(&path);
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), PropalError::InvalidJson(_)));
    }

    #[test]
    fn test_missing_stores_are_empty() {
        let temp = TempDir::new().unwrap();

        assert!(read_clients(temp.path(), "default").unwrap().is_empty());
        assert!(read_tarifs(temp.path(), "default").unwrap().is_empty());
        assert!(read_propals(temp.path(), "default").unwrap().is_empty());
    }

    #[test]
    fn test_write_and_read_tarifs() {
        let temp = TempDir::new().unwrap();
        let tarifs = vec![
            Tarif::new("t-001".to_string(), "Transport".to_string(), 5.0).with_default(true),
            Tarif::new("t-002".to_string(), "Prestation".to_string(), 40.0),
        ];

        write_tarifs(temp.path(), "default", &tarifs).unwrap();
        let read = read_tarifs(temp.path(), "default").unwrap();

        assert_eq!(read, tarifs);
    }

    #[test]
    fn test_write_and_read_propals() {
        let temp = TempDir::new().unwrap();
        let propals = vec![Propal::new(
            "p-001".to_string(),
            "0001".to_string(),
            "c-001".to_string(),
            Utc::now(),
        )];

        write_propals(temp.path(), "default", &propals).unwrap();
        let read = read_propals(temp.path(), "default").unwrap();

        assert_eq!(read, propals);
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let clients = vec![Client::new(
            "c-001".to_string(),
            "Durand".to_string(),
            "Alice".to_string(),
        )];

        write_clients(temp.path(), "acme", &clients).unwrap();
        assert!(get_clients_path(temp.path(), "acme").exists());
    }

    #[test]
    fn test_read_config_default_when_missing() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir(temp.path().join(".propal")).unwrap();

        let config = read_config(temp.path()).unwrap();
        assert_eq!(config.tenant, "default");
        assert_eq!(config.currency, "EUR");
    }

    #[test]
    fn test_write_then_read_config() {
        let temp = TempDir::new().unwrap();
        let mut config = Config::default();
        config.tenant = "acme".to_string();

        write_config(temp.path(), &config).unwrap();
        let read = read_config(temp.path()).unwrap();
        assert_eq!(read.tenant, "acme");
    }
}
