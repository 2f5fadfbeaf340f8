use super::ui;
use crate::core::karat::{GRAMS_PER_TROY_OUNCE, Karat, convert_to_karat_prices};
use crate::core::quote::SpotPriceProvider;
use anyhow::Result;
use chrono::{TimeZone, Utc};
use comfy_table::Cell;

pub async fn run(provider: &(dyn SpotPriceProvider + Send + Sync), currency: &str) -> Result<()> {
    let pb = ui::new_spinner("Fetching spot gold price...");
    let quote = provider.fetch_spot(currency).await;
    pb.finish_and_clear();
    let quote = quote?;

    let prices = convert_to_karat_prices(quote.price);

    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Karat"),
        ui::header_cell(&format!("Buy ({currency}/g)")),
        ui::header_cell(&format!("Sell ({currency}/g)")),
    ]);

    for karat in Karat::ALL {
        let price = prices.get(karat);
        table.add_row(vec![
            Cell::new(karat.to_string()),
            ui::price_cell(price.buy_price),
            ui::price_cell(price.sell_price),
        ]);
    }

    println!(
        "{}\n",
        ui::style_text(&format!("Gold rates ({currency} per gram)"), ui::StyleType::Title)
    );
    println!("{table}");
    println!(
        "\nSpot: {} {} {currency}/oz ({:.2} {currency}/g) via {}{}",
        ui::style_text(&format!("{:.2}", quote.price), ui::StyleType::Label),
        quote.metal,
        quote.price / GRAMS_PER_TROY_OUNCE,
        quote.exchange,
        format_quote_time(quote.timestamp)
    );

    Ok(())
}

fn format_quote_time(timestamp: i64) -> String {
    Utc.timestamp_opt(timestamp, 0)
        .single()
        .map(|dt| format!(", {}", dt.format("%Y-%m-%d %H:%M UTC")))
        .unwrap_or_default()
}
