//! CLI argument parsing types.
//!
//! This module provides the command-line interface structure for the
//! invoicegen binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod input;

pub use input::InvoiceFile;

/// Invoice-Generator API command-line interface.
#[derive(Parser, Debug)]
#[command(name = "invoicegen", about = "Invoice-Generator API CLI", version)]
pub struct Cli {
    /// Output previews as JSON instead of a table.
    #[arg(long, global = true, default_value = "false")]
    pub json: bool,

    /// strftime-style format for invoice dates.
    #[arg(long, global = true)]
    pub date_format: Option<String>,

    /// Locale identifier for date formatting and Accept-Language (e.g. fr_FR).
    #[arg(long, global = true)]
    pub locale: Option<String>,

    /// IANA timezone name for date defaults (e.g. Europe/Paris).
    #[arg(long, global = true)]
    pub timezone: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render an invoice definition and write the document.
    Render {
        /// Path to the invoice definition file (JSON).
        input: PathBuf,

        /// Where to write the rendered document.
        #[arg(long, short, default_value = "invoice.pdf")]
        output: PathBuf,
    },

    /// Preview an invoice definition without calling the API.
    Preview {
        /// Path to the invoice definition file (JSON).
        input: PathBuf,
    },
}
