use anyhow::Result;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use tracing::{debug, error, instrument};

use crate::core::error::FetchError;
use crate::core::quote::{GoldQuote, SpotPriceProvider};

// GoldApiProvider implementation for SpotPriceProvider
pub struct GoldApiProvider {
    base_url: String,
    api_key: String,
}

impl GoldApiProvider {
    pub fn new(base_url: &str, api_key: &str) -> Self {
        GoldApiProvider {
            base_url: base_url.to_string(),
            api_key: api_key.to_string(),
        }
    }
}

#[async_trait]
impl SpotPriceProvider for GoldApiProvider {
    #[instrument(
        name = "GoldSpotFetch",
        skip(self),
        fields(currency = %currency)
    )]
    async fn fetch_spot(&self, currency: &str) -> Result<GoldQuote> {
        let url = format!("{}/api/XAU/{}", self.base_url, currency);
        debug!("Requesting spot price from {}", url);

        let client = reqwest::Client::builder().user_agent("aurum/1.0").build()?;
        let response = client
            .get(&url)
            .header("x-access-token", &self.api_key)
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(|e| {
                let err = FetchError::Transport(e);
                error!(error = %err, "Spot price request failed for {currency}");
                err
            })?;

        if !response.status().is_success() {
            let err = FetchError::Api {
                status: response.status().as_u16(),
            };
            error!(error = %err, "Spot price request rejected for {currency}");
            return Err(err.into());
        }

        let quote = response.json::<GoldQuote>().await?;
        debug!(?quote, "Received spot quote");
        Ok(quote)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const TEST_KEY: &str = "goldapi-test-token";

    async fn create_mock_server(currency: &str, mock_response: &str) -> MockServer {
        let mock_server = MockServer::start().await;
        let request_path = format!("/api/XAU/{currency}");

        Mock::given(method("GET"))
            .and(path(request_path))
            .respond_with(ResponseTemplate::new(200).set_body_string(mock_response))
            .mount(&mock_server)
            .await;

        mock_server
    }

    #[tokio::test]
    async fn test_successful_spot_fetch_passes_body_through() {
        let mock_response = r#"{
            "timestamp": 1717582937,
            "metal": "XAU",
            "currency": "USD",
            "exchange": "FOREXCOM",
            "price": 2345.67,
            "prev_close_price": 2330.1,
            "ch": 15.57,
            "chp": 0.67
        }"#;

        let mock_server = create_mock_server("USD", mock_response).await;
        let provider = GoldApiProvider::new(&mock_server.uri(), TEST_KEY);

        let quote = provider.fetch_spot("USD").await.unwrap();
        assert_eq!(quote.timestamp, 1717582937);
        assert_eq!(quote.price, 2345.67);
        assert_eq!(quote.currency, "USD");
        assert_eq!(quote.exchange, "FOREXCOM");
        assert_eq!(quote.metal, "XAU");
        assert_eq!(quote.prev_close_price, Some(2330.1));
        assert_eq!(quote.ch, Some(15.57));
        assert_eq!(quote.chp, Some(0.67));
    }

    #[tokio::test]
    async fn test_spot_fetch_without_change_fields() {
        let mock_response = r#"{
            "timestamp": 1717582937,
            "metal": "XAU",
            "currency": "EUR",
            "exchange": "FOREXCOM",
            "price": 2160.05
        }"#;

        let mock_server = create_mock_server("EUR", mock_response).await;
        let provider = GoldApiProvider::new(&mock_server.uri(), TEST_KEY);

        let quote = provider.fetch_spot("EUR").await.unwrap();
        assert_eq!(quote.price, 2160.05);
        assert!(quote.prev_close_price.is_none());
        assert!(quote.ch.is_none());
        assert!(quote.chp.is_none());
    }

    #[tokio::test]
    async fn test_spot_fetch_sends_access_token_header() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/XAU/USD"))
            .and(header("x-access-token", TEST_KEY))
            .and(header("content-type", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"timestamp": 1, "metal": "XAU", "currency": "USD", "exchange": "FOREXCOM", "price": 2000.0}"#,
            ))
            .expect(1)
            .mount(&mock_server)
            .await;

        let provider = GoldApiProvider::new(&mock_server.uri(), TEST_KEY);
        provider.fetch_spot("USD").await.unwrap();
    }

    #[tokio::test]
    async fn test_spot_fetch_error_status() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/XAU/USD"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let provider = GoldApiProvider::new(&mock_server.uri(), TEST_KEY);
        let err = provider.fetch_spot("USD").await.unwrap_err();

        assert!(err.to_string().contains("500"));
        match err.downcast_ref::<FetchError>() {
            Some(FetchError::Api { status }) => assert_eq!(*status, 500),
            other => panic!("expected FetchError::Api, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_spot_fetch_malformed_body_is_not_a_fetch_error() {
        let mock_server = create_mock_server("USD", r#"{"price": "not a number"}"#).await;
        let provider = GoldApiProvider::new(&mock_server.uri(), TEST_KEY);

        let err = provider.fetch_spot("USD").await.unwrap_err();
        assert!(err.downcast_ref::<FetchError>().is_none());
    }
}
