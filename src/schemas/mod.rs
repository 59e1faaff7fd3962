//! Schema types for propal
//!
//! All types round-trip through the JSON record stores.

mod client;
mod config;
mod propal;
mod tarif;

pub use client::Client;
pub use config::Config;
pub use propal::{LineItem, LineItemMap, Propal, RawStatus};
pub use tarif::Tarif;
