//! CLI parsing tests.

use clap::{CommandFactory, Parser};
use triagectl::cli::{Cli, Commands};

#[test]
fn cli_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn parses_local_analyze() {
    let cli = Cli::try_parse_from(["triagectl", "analyze", "the invoice is wrong", "--json"])
        .unwrap();
    match cli.command {
        Commands::Analyze { text, title, json } => {
            assert_eq!(text, "the invoice is wrong");
            assert!(title.is_empty());
            assert!(json);
        }
        _ => panic!("expected analyze command"),
    }
}

#[test]
fn parses_submit_with_overrides() {
    let cli = Cli::try_parse_from([
        "triagectl",
        "submit",
        "--description",
        "long wait at the front desk",
        "--patient",
        "Lee Park",
        "--urgency",
        "high",
    ])
    .unwrap();
    match cli.command {
        Commands::Submit {
            description,
            patient,
            urgency,
            category,
            ..
        } => {
            assert_eq!(description, "long wait at the front desk");
            assert_eq!(patient, "Lee Park");
            assert_eq!(urgency.as_deref(), Some("high"));
            assert!(category.is_none());
        }
        _ => panic!("expected submit command"),
    }
}

#[test]
fn addr_flag_is_global() {
    let cli = Cli::try_parse_from(["triagectl", "status", "--addr", "127.0.0.1:9999"]).unwrap();
    assert_eq!(cli.addr.as_deref(), Some("127.0.0.1:9999"));
}

#[test]
fn submit_requires_description() {
    assert!(Cli::try_parse_from(["triagectl", "submit", "--patient", "Lee"]).is_err());
}
