//! `invoicer-receipt` — prints the receipt of a sample invoice.
//!
//! A thin wrapper around the domain crates: settings come from the
//! environment, the invoice is built in code.

pub mod config;

use anyhow::Context;
use rust_decimal_macros::dec;

use invoicer_core::{DomainResult, NumberSource, RandomNumbers, SeededNumbers};
use invoicer_invoicing::Invoice;
use invoicer_products::Product;

use crate::config::{ReceiptFormat, Settings};

/// Number source selected by the settings.
pub fn number_source(settings: &Settings) -> Box<dyn NumberSource> {
    match settings.seed {
        Some(seed) => Box::new(SeededNumbers::new(seed)),
        None => Box::new(RandomNumbers),
    }
}

/// A basket touching every product category, with one repeated product.
pub fn sample_invoice(source: &dyn NumberSource) -> DomainResult<Invoice> {
    let mut invoice = Invoice::with_number_source(source);
    invoice.add_product_with_quantity(Product::tax_free("Owoce", dec!(12.50))?, 2)?;
    invoice.add_product(Product::dairy("Maslanka", dec!(3.20))?)?;
    invoice.add_product_with_quantity(Product::other("Pinezka", dec!(0.01))?, 100)?;
    invoice.add_product(Product::bottle_of_wine("Wino", dec!(39.99))?)?;
    invoice.add_product(Product::fuel_canister("Kanister paliwa", dec!(80))?)?;
    invoice.add_product(Product::tax_free("Owoce", dec!(12.50))?)?;
    Ok(invoice)
}

pub fn render(invoice: &Invoice, format: ReceiptFormat) -> anyhow::Result<String> {
    match format {
        ReceiptFormat::Text => Ok(invoice.as_text()),
        ReceiptFormat::Json => {
            let summary = invoice.summary().context("computing invoice totals")?;
            serde_json::to_string_pretty(&summary).context("serializing invoice summary")
        }
    }
}
