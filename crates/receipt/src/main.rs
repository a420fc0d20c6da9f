use anyhow::Context;

use invoicer_receipt::config::Settings;

fn main() -> anyhow::Result<()> {
    invoicer_observability::init();

    let settings = Settings::from_env().context("reading settings")?;
    let source = invoicer_receipt::number_source(&settings);

    let invoice = invoicer_receipt::sample_invoice(source.as_ref()).context("building sample invoice")?;
    tracing::info!(invoice = %invoice.number(), lines = invoice.len(), "invoice ready");

    println!("{}", invoicer_receipt::render(&invoice, settings.format)?);
    Ok(())
}
