//! Currency exchange rate abstractions

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A table of exchange rates relative to a base currency.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExchangeRateTable {
    /// ISO code of the base currency, e.g. "USD".
    pub base: String,
    /// ISO date the rates were published.
    pub date: String,
    /// Multiplier per ISO currency code.
    pub rates: HashMap<String, f64>,
}

#[async_trait]
pub trait ExchangeRateProvider: Send + Sync {
    async fn fetch_rates(&self) -> Result<ExchangeRateTable>;
}
