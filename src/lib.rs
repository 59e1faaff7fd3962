//! Propal - Track commercial proposals from draft to paid invoice
//!
//! This library provides the core functionality for the propal CLI, including:
//! - Schema definitions for propals, clients, tarifs and configs
//! - Domain logic for the stage lifecycle, escalation overlays and controls
//! - Line-item aggregation (pricing and duration totals)
//! - File system utilities for reading/writing the JSON stores

pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod fs;
pub mod schemas;
pub mod service;

// Re-export commonly used types
pub use errors::{PropalError, Result};
pub use schemas::{Client, Config, LineItem, LineItemMap, Propal, RawStatus, Tarif};
