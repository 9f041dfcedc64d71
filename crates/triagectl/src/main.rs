//! Triage Control - CLI client for the complaint triage daemon.

use anyhow::Result;
use clap::Parser;
use triagectl::cli::{Cli, Commands};
use triagectl::commands;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let addr = cli.addr.as_deref();

    match cli.command {
        Commands::Analyze { text, title, json } => commands::analyze_text(&text, &title, json),
        Commands::Submit {
            title,
            description,
            patient,
            phone,
            category,
            urgency,
        } => {
            commands::submit(
                addr,
                &title,
                &description,
                &patient,
                phone.as_deref(),
                category.as_deref(),
                urgency.as_deref(),
            )
            .await
        }
        Commands::List { status, category } => {
            commands::list(addr, status.as_deref(), category.as_deref()).await
        }
        Commands::Status => commands::status(addr).await,
    }
}
