//! Invoice-Generator API CLI binary.
//!
//! Renders invoice definition files to documents, or previews them locally.

use std::env;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use invoicegen::cli::{Cli, Command, InvoiceFile};
use invoicegen::{ClientConfig, Invoice, InvoiceClient, InvoiceError, LineItem};
use tabled::{Table, Tabled};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            if matches!(e, InvoiceError::ConfigMissing(_)) {
                eprintln!("Hint: Set INVOICE_API_KEY environment variable");
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> invoicegen::Result<()> {
    match cli.command {
        Command::Render { ref input, ref output } => {
            let config = Arc::new(build_config(&cli, true)?);
            let client = InvoiceClient::new(config.clone())?;
            let invoice = InvoiceFile::load(input)?.into_invoice(config)?;

            client.download(&invoice, output).await?;
            println!("Wrote {}", output.display());
            Ok(())
        }
        Command::Preview { ref input } => {
            let config = Arc::new(build_config(&cli, false)?);
            let invoice = InvoiceFile::load(input)?.into_invoice(config)?;
            preview(&invoice, cli.json)
        }
    }
}

/// Build the configuration from the environment plus CLI overrides.
///
/// The API key is only required when we will actually talk to the API;
/// `preview` runs fully offline.
fn build_config(cli: &Cli, require_key: bool) -> invoicegen::Result<ClientConfig> {
    let api_key = match env::var("INVOICE_API_KEY") {
        Ok(key) => key,
        Err(_) if !require_key => "offline-preview".to_string(),
        Err(_) => {
            return Err(InvoiceError::ConfigMissing(
                "INVOICE_API_KEY environment variable not set".to_string(),
            ))
        }
    };

    let mut builder = ClientConfig::builder(api_key);
    if let Ok(url) = env::var("INVOICE_API_URL") {
        builder = builder.endpoint_url(url);
    }
    if let Some(format) = &cli.date_format {
        builder = builder.date_format(format);
    }
    if let Some(locale) = &cli.locale {
        builder = builder.locale(locale);
    }
    if let Some(timezone) = &cli.timezone {
        builder = builder.timezone(timezone);
    }
    builder.build()
}

fn preview(invoice: &Invoice, json: bool) -> invoicegen::Result<()> {
    if json {
        // The exact payload that `render` would send.
        println!("{}", serde_json::to_string_pretty(&invoice.to_json()?)?);
        return Ok(());
    }

    println!("Invoice from {} to {}", invoice.from, invoice.to);
    if let Some(number) = &invoice.number {
        println!("Number: {number}");
    }

    let rows: Vec<ItemRow> = invoice.items().iter().map(ItemRow::from).collect();
    println!("{}", Table::new(rows));

    for field in invoice.custom_fields() {
        println!("{}: {}", field.name, field.value);
    }
    println!("Subtotal: {:.2} {}", invoice.subtotal(), invoice.currency);
    Ok(())
}

// Table row type for non-JSON output

#[derive(Tabled)]
struct ItemRow {
    name: String,
    quantity: f64,
    unit_cost: f64,
    amount: f64,
    description: String,
}

impl From<&LineItem> for ItemRow {
    fn from(item: &LineItem) -> Self {
        Self {
            name: item.name.clone(),
            quantity: item.quantity,
            unit_cost: item.unit_cost,
            amount: item.amount(),
            description: item.description.clone().unwrap_or_default(),
        }
    }
}
