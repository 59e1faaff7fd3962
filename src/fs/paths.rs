//! Path resolution utilities for propal
//!
//! Locates the data root and constructs paths to the per-tenant record
//! stores.

use std::path::{Path, PathBuf};

use crate::errors::{PropalError, Result};

/// Find the data root containing a .propal directory.
///
/// Walks up the directory tree from the starting directory.
///
/// # Errors
/// * `DataRootNotFound` - If no .propal directory is found
pub fn find_data_root(start_cwd: &Path) -> Result<PathBuf> {
    let mut current = start_cwd
        .canonicalize()
        .map_err(|e| PropalError::DataRootNotFound(format!("Cannot resolve path: {}", e)))?;

    loop {
        if current.join(".propal").exists() {
            return Ok(current);
        }

        match current.parent() {
            Some(parent) if parent != current => {
                current = parent.to_path_buf();
            }
            _ => {
                return Err(PropalError::DataRootNotFound(
                    "Could not find a data root with a .propal directory; run `propal init`"
                        .to_string(),
                ));
            }
        }
    }
}

/// Resolve the current working directory, optionally using an override.
pub fn resolve_cwd(cwd_option: Option<&Path>) -> PathBuf {
    match cwd_option {
        Some(path) => path.to_path_buf(),
        None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    }
}

/// Get the path to the .propal directory.
pub fn get_propal_dir(root: &Path) -> PathBuf {
    root.join(".propal")
}

/// Get the path to the config.json file.
pub fn get_config_path(root: &Path) -> PathBuf {
    get_propal_dir(root).join("config.json")
}

/// Get the path to a tenant's data directory.
pub fn get_tenant_dir(root: &Path, tenant: &str) -> PathBuf {
    get_propal_dir(root).join(tenant)
}

/// Get the path to a tenant's clients.json store.
pub fn get_clients_path(root: &Path, tenant: &str) -> PathBuf {
    get_tenant_dir(root, tenant).join("clients.json")
}

/// Get the path to a tenant's tarifs.json store.
pub fn get_tarifs_path(root: &Path, tenant: &str) -> PathBuf {
    get_tenant_dir(root, tenant).join("tarifs.json")
}

/// Get the path to a tenant's propals.json store.
pub fn get_propals_path(root: &Path, tenant: &str) -> PathBuf {
    get_tenant_dir(root, tenant).join("propals.json")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup_root() -> TempDir {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir(temp.path().join(".propal")).unwrap();
        temp
    }

    #[test]
    fn test_find_data_root_from_root() {
        let temp = setup_root();
        let root = find_data_root(temp.path()).unwrap();
        assert_eq!(root.canonicalize().unwrap(), temp.path().canonicalize().unwrap());
    }

    #[test]
    fn test_find_data_root_from_subdir() {
        let temp = setup_root();
        let subdir = temp.path().join("reports").join("deep");
        std::fs::create_dir_all(&subdir).unwrap();

        let root = find_data_root(&subdir).unwrap();
        assert_eq!(root.canonicalize().unwrap(), temp.path().canonicalize().unwrap());
    }

    #[test]
    fn test_find_data_root_not_found() {
        let temp = TempDir::new().unwrap();

        let result = find_data_root(temp.path());
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("propal init"));
    }

    #[test]
    fn test_store_paths() {
        let root = PathBuf::from("/data");

        assert_eq!(get_config_path(&root), PathBuf::from("/data/.propal/config.json"));
        assert_eq!(get_tenant_dir(&root, "acme"), PathBuf::from("/data/.propal/acme"));
        assert_eq!(
            get_clients_path(&root, "acme"),
            PathBuf::from("/data/.propal/acme/clients.json")
        );
        assert_eq!(
            get_tarifs_path(&root, "acme"),
            PathBuf::from("/data/.propal/acme/tarifs.json")
        );
        assert_eq!(
            get_propals_path(&root, "acme"),
            PathBuf::from("/data/.propal/acme/propals.json")
        );
    }

    #[test]
    fn test_resolve_cwd_with_override() {
        let path = PathBuf::from("/custom/path");
        assert_eq!(resolve_cwd(Some(&path)), path);
    }

    #[test]
    fn test_resolve_cwd_without_override() {
        let resolved = resolve_cwd(None);
        assert!(!resolved.as_os_str().is_empty());
    }
}
