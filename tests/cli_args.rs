//! CLI argument parsing tests.
//!
//! These tests pin the expected CLI interface.

use std::path::PathBuf;

use clap::Parser;
use invoicegen::cli::{Cli, Command};

#[test]
fn test_cli_parses_render_subcommand() {
    let cli = Cli::parse_from(["invoicegen", "render", "invoice.json"]);

    assert!(!cli.json);
    match cli.command {
        Command::Render { input, output } => {
            assert_eq!(input, PathBuf::from("invoice.json"));
            assert_eq!(output, PathBuf::from("invoice.pdf"));
        }
        _ => panic!("Expected Render command"),
    }
}

#[test]
fn test_cli_parses_render_with_output() {
    let cli = Cli::parse_from([
        "invoicegen",
        "render",
        "invoice.json",
        "--output",
        "march.pdf",
    ]);

    match cli.command {
        Command::Render { output, .. } => {
            assert_eq!(output, PathBuf::from("march.pdf"));
        }
        _ => panic!("Expected Render command"),
    }
}

#[test]
fn test_cli_parses_preview_subcommand() {
    let cli = Cli::parse_from(["invoicegen", "preview", "invoice.json"]);

    match cli.command {
        Command::Preview { input } => {
            assert_eq!(input, PathBuf::from("invoice.json"));
        }
        _ => panic!("Expected Preview command"),
    }
}

#[test]
fn test_cli_parses_global_flags() {
    let cli = Cli::parse_from([
        "invoicegen",
        "preview",
        "invoice.json",
        "--json",
        "--locale",
        "fr_FR",
        "--timezone",
        "Europe/Paris",
        "--date-format",
        "%Y-%m-%d",
    ]);

    assert!(cli.json);
    assert_eq!(cli.locale.as_deref(), Some("fr_FR"));
    assert_eq!(cli.timezone.as_deref(), Some("Europe/Paris"));
    assert_eq!(cli.date_format.as_deref(), Some("%Y-%m-%d"));
}

#[test]
fn test_cli_rejects_missing_input() {
    let result = Cli::try_parse_from(["invoicegen", "render"]);
    assert!(result.is_err());
}

#[test]
fn test_cli_rejects_unknown_subcommand() {
    let result = Cli::try_parse_from(["invoicegen", "frobnicate"]);
    assert!(result.is_err());
}
