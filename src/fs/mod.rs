//! File system utilities for propal
//!
//! Provides data-root resolution and JSON store operations.

mod json;
mod paths;

pub use json::{
    read_clients, read_config, read_json, read_propals, read_tarifs, write_clients, write_config,
    write_json, write_propals, write_tarifs,
};
pub use paths::{
    find_data_root, get_clients_path, get_config_path, get_propal_dir, get_propals_path,
    get_tarifs_path, get_tenant_dir, resolve_cwd,
};
