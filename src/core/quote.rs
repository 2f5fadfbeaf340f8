//! Spot price abstractions and core types

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A single spot quote for gold, priced per troy ounce.
///
/// The field names follow the goldapi.io response body; the quote is
/// returned to callers exactly as the API produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoldQuote {
    /// Unix timestamp (seconds) of the quote.
    pub timestamp: i64,
    /// Price per troy ounce in `currency` units.
    pub price: f64,
    /// ISO currency code the price is quoted in.
    pub currency: String,
    /// Exchange the quote was sourced from.
    pub exchange: String,
    /// Metal symbol, "XAU" for gold.
    pub metal: String,
    pub prev_close_price: Option<f64>,
    /// Absolute change since previous close.
    pub ch: Option<f64>,
    /// Percent change since previous close.
    pub chp: Option<f64>,
}

#[async_trait]
pub trait SpotPriceProvider: Send + Sync {
    async fn fetch_spot(&self, currency: &str) -> Result<GoldQuote>;
}
