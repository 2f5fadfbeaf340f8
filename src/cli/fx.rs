use super::ui;
use crate::core::currency::ExchangeRateProvider;
use anyhow::Result;
use comfy_table::{Cell, CellAlignment};

pub async fn run(provider: &(dyn ExchangeRateProvider + Send + Sync)) -> Result<()> {
    let pb = ui::new_spinner("Fetching exchange rates...");
    let rates = provider.fetch_rates().await;
    pb.finish_and_clear();
    let rates = rates?;

    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Currency"),
        ui::header_cell(&format!("Rate (per {})", rates.base)),
    ]);

    let mut entries: Vec<_> = rates.rates.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));
    for (code, rate) in entries {
        table.add_row(vec![
            Cell::new(code),
            Cell::new(format!("{rate:.4}")).set_alignment(CellAlignment::Right),
        ]);
    }

    println!(
        "{}\n",
        ui::style_text(
            &format!("Exchange rates (base {}, {})", rates.base, rates.date),
            ui::StyleType::Title
        )
    );
    println!("{table}");

    Ok(())
}
