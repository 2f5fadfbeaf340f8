use super::ui;
use crate::core::quote::SpotPriceProvider;
use anyhow::Result;
use chrono::{TimeZone, Utc};
use comfy_table::Cell;

pub async fn run(provider: &(dyn SpotPriceProvider + Send + Sync), currency: &str) -> Result<()> {
    let pb = ui::new_spinner("Fetching spot gold price...");
    let quote = provider.fetch_spot(currency).await;
    pb.finish_and_clear();
    let quote = quote?;

    let mut table = ui::new_styled_table();
    table.set_header(vec![ui::header_cell("Field"), ui::header_cell("Value")]);

    table.add_row(vec![Cell::new("Metal"), Cell::new(&quote.metal)]);
    table.add_row(vec![Cell::new("Exchange"), Cell::new(&quote.exchange)]);
    table.add_row(vec![
        Cell::new(format!("Price ({}/oz)", quote.currency)),
        ui::price_cell(quote.price),
    ]);
    table.add_row(vec![
        Cell::new("Previous close"),
        quote
            .prev_close_price
            .map_or(Cell::new("N/A"), ui::price_cell),
    ]);
    table.add_row(vec![
        Cell::new("Change"),
        match (quote.ch, quote.chp) {
            (Some(ch), Some(chp)) => Cell::new(ui::format_change(ch, chp)),
            _ => Cell::new("N/A"),
        },
    ]);
    table.add_row(vec![
        Cell::new("Quoted at"),
        Cell::new(format_quote_time(quote.timestamp)),
    ]);

    println!(
        "{}\n",
        ui::style_text(&format!("Spot gold ({currency})"), ui::StyleType::Title)
    );
    println!("{table}");

    Ok(())
}

fn format_quote_time(timestamp: i64) -> String {
    Utc.timestamp_opt(timestamp, 0)
        .single()
        .map(|dt| dt.format("%Y-%m-%d %H:%M UTC").to_string())
        .unwrap_or_else(|| timestamp.to_string())
}
