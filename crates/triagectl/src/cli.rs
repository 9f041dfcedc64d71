//! CLI - command-line argument parsing.
//!
//! Defines the CLI structure using clap; execution logic lives in the
//! commands module.

use clap::{Parser, Subcommand};

/// Triage CLI
#[derive(Parser)]
#[command(name = "triagectl")]
#[command(about = "Hospital complaint triage - analyze and submit complaints", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Daemon address (overrides $TRIAGED_ADDR and the default)
    #[arg(long, global = true)]
    pub addr: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a complaint text locally, without the daemon
    Analyze {
        /// Complaint body text
        text: String,

        /// Optional complaint title
        #[arg(long, default_value = "")]
        title: String,

        /// Print the raw analysis JSON instead of a summary
        #[arg(long)]
        json: bool,
    },

    /// Submit a complaint to the daemon
    Submit {
        /// Complaint title
        #[arg(long, default_value = "")]
        title: String,

        /// Complaint body text
        #[arg(long)]
        description: String,

        /// Patient name
        #[arg(long)]
        patient: String,

        /// Patient phone number
        #[arg(long)]
        phone: Option<String>,

        /// Category override (otherwise the analyzer's suggestion is used)
        #[arg(long)]
        category: Option<String>,

        /// Urgency override: low|medium|high|critical
        #[arg(long)]
        urgency: Option<String>,
    },

    /// List recorded complaints
    List {
        /// Filter by status: open|assigned
        #[arg(long)]
        status: Option<String>,

        /// Filter by category label
        #[arg(long)]
        category: Option<String>,
    },

    /// Show daemon health
    Status,
}
