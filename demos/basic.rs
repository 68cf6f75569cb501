//! Basic example demonstrating the Invoice-Generator API client.
//!
//! Run with:
//! ```
//! INVOICE_API_KEY=your-key cargo run --example basic
//! ```

use invoicegen::{InvoiceClient, SubtotalFields, TaxDisplay};

#[tokio::main]
async fn main() -> invoicegen::Result<()> {
    // Initialize tracing for debugging (optional)
    tracing_subscriber::fmt::init();

    // Create client from environment variables
    println!("Creating invoice client...");
    let client = InvoiceClient::from_env()?;
    println!("Rendering endpoint: {}", client.config().endpoint_url());

    // Build an invoice
    println!("\n--- Building Invoice ---");
    let mut invoice = client.invoice("Acme Corp", "Wile E. Coyote");
    invoice.number = Some("INV-0042".to_string());
    invoice.currency = "EUR".to_string();
    invoice.payment_terms = Some("NET 30".to_string());
    invoice.notes = Some("Thanks for your business!".to_string());

    invoice.add_item("Anvil", 2.0, 150.0, Some("Drop-forged, 50kg".to_string()));
    invoice.add_item("Rocket skates", 1.0, 300.0, None);
    invoice.add_item("Consulting", 3.5, 80.0, Some("Trap engineering".to_string()));

    invoice.add_custom_field("PO Number", "PO-1234");

    // Show tax as a flat amount and reveal the discounts line
    invoice.tax = 57.0;
    invoice.discounts = 25.0;
    invoice.toggle_subtotal(SubtotalFields {
        tax: TaxDisplay::Amount,
        discounts: true,
        ..Default::default()
    });

    // Relabel a couple of section headers
    invoice.set_template_text("header", "FACTURE")?;
    invoice.set_template_text("total_title", "Total TTC")?;

    for item in invoice.items() {
        println!(
            "  - {} x{} @ {:.2} = {:.2}",
            item.name,
            item.quantity,
            item.unit_cost,
            item.amount()
        );
    }
    println!("Subtotal: {:.2} {}", invoice.subtotal(), invoice.currency);

    // Render and persist the document
    println!("\n--- Rendering ---");
    client.download(&invoice, "invoice.pdf").await?;
    println!("Wrote invoice.pdf");

    Ok(())
}
