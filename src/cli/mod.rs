//! CLI module for propal
//!
//! Provides the command-line interface using clap.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Propal - Track commercial proposals from draft to paid invoice
#[derive(Parser, Debug)]
#[command(name = "propal")]
#[command(version)]
#[command(about = "Track commercial proposals from draft to paid invoice")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress info-level output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Override the working directory
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a propal data root in the current directory
    Init {
        /// Force initialization even if .propal already exists
        #[arg(long)]
        force: bool,
    },

    /// Create a new propal for a client
    Create {
        /// Client ID
        #[arg(long)]
        client: String,

        /// Reference date (RFC 3339); defaults to 28 days from now
        #[arg(long)]
        date: Option<String>,
    },

    /// List propals with their effective stage
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Filter by stored status (draft, sent, won, done, to_pay, paid)
        #[arg(long)]
        state: Option<String>,
    },

    /// Show details of a specific propal
    Show {
        /// Propal ID
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Set or clear a line item on a propal
    Item {
        /// Propal ID
        id: String,

        /// Tarif ID
        tarif: String,

        /// Quantity; zero removes the line item
        #[arg(long)]
        qtt: f64,

        /// Free-text detail for the line
        #[arg(long)]
        detail: Option<String>,
    },

    /// Toggle the advance checkbox at the current stage
    Advance {
        /// Propal ID
        id: String,

        /// Walk the back-edge instead (e.g. revert Won to Sent)
        #[arg(long)]
        uncheck: bool,
    },

    /// Fire the notify control at the current stage
    Notify {
        /// Propal ID
        id: String,
    },

    /// Delete a propal record
    Delete {
        /// Propal ID
        id: String,
    },

    /// List the client records
    Clients {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the tarif catalog
    Tarifs {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
