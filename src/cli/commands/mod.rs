//! Command implementations

pub mod advance;
pub mod clients;
pub mod create;
pub mod delete;
pub mod init;
pub mod item;
pub mod list;
pub mod notify;
pub mod show;
pub mod tarifs;

use std::path::Path;

use crate::config::load_config;
use crate::errors::Result;
use crate::fs::{find_data_root, resolve_cwd};
use crate::service::ProposalService;

/// Resolve the data root and open a service for the configured tenant
pub(crate) fn open_service(cwd: Option<&Path>) -> Result<ProposalService> {
    let root = find_data_root(&resolve_cwd(cwd))?;
    let config = load_config(&root)?;
    Ok(ProposalService::new(root, config.tenant))
}
