use anyhow::{Result, anyhow};
use async_trait::async_trait;
use tracing::{debug, error, instrument};

use crate::core::currency::{ExchangeRateProvider, ExchangeRateTable};
use crate::core::error::FetchError;

// ExchangeRateApiProvider implementation for ExchangeRateProvider
//
// The endpoint is unauthenticated and always quotes against a USD base.
pub struct ExchangeRateApiProvider {
    base_url: String,
}

impl ExchangeRateApiProvider {
    pub fn new(base_url: &str) -> Self {
        ExchangeRateApiProvider {
            base_url: base_url.to_string(),
        }
    }
}

#[async_trait]
impl ExchangeRateProvider for ExchangeRateApiProvider {
    #[instrument(name = "ExchangeRateFetch", skip(self))]
    async fn fetch_rates(&self) -> Result<ExchangeRateTable> {
        let url = format!("{}/v4/latest/USD", self.base_url);
        debug!("Requesting exchange rates from {}", url);

        let client = reqwest::Client::builder().user_agent("aurum/1.0").build()?;
        let response = client.get(&url).send().await.map_err(|e| {
            let err = FetchError::Transport(e);
            error!(error = %err, "Exchange rate request failed");
            err
        })?;

        if !response.status().is_success() {
            let err = FetchError::Api {
                status: response.status().as_u16(),
            };
            error!(error = %err, "Exchange rate request rejected");
            return Err(err.into());
        }

        let text = response.text().await?;
        let table: ExchangeRateTable = serde_json::from_str(&text)
            .map_err(|e| anyhow!("Failed to parse exchange rate response: {}", e))?;

        debug!(
            base = %table.base,
            date = %table.date,
            rates = table.rates.len(),
            "Received exchange rates"
        );
        Ok(table)
    }
}
