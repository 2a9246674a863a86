// In crates/api-client/src/lib.rs

use app_config::QuoteSettings;
use async_trait::async_trait;
use core_types::Price;
use serde_json::Value;
use std::time::Duration;

pub mod error;
pub mod types;

// Re-export public types
pub use error::{Error, Result};
pub use types::QuoteClient;

/// A source of the current price for a single, fixed asset.
///
/// Implementations must not panic: every failure is reported through `Err`.
#[async_trait]
pub trait PriceSource: Send + Sync {
    /// Fetches the latest price.
    async fn fetch(&self) -> Result<Price>;
}

impl QuoteClient {
    /// Constructs a new QuoteClient from QuoteSettings.
    pub fn new(settings: &QuoteSettings) -> Result<Self> {
        let timeout = Duration::from_secs(settings.timeout_secs);
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::ClientBuildError(e.to_string()))?;

        Ok(QuoteClient {
            http_client,
            base_url: settings.base_url.clone(),
            asset_id: settings.asset_id.clone(),
            vs_currency: settings.vs_currency.clone(),
            timeout,
        })
    }

    /// Fetches the current price of the configured asset.
    ///
    /// This corresponds to `GET /simple/price?ids=<asset>&vs_currencies=<currency>`.
    pub async fn get_price(&self) -> Result<Price> {
        let response = self
            .http_client
            .get(&self.base_url)
            .query(&[
                ("ids", self.asset_id.as_str()),
                ("vs_currencies", self.vs_currency.as_str()),
            ])
            .send()
            .await
            .map_err(Error::RequestFailed)?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::HttpStatus(status.as_u16()));
        }

        let text = response.text().await.map_err(Error::RequestFailed)?;
        let value: Value = serde_json::from_str(&text).map_err(Error::DeserializationFailed)?;

        parse_price(&value, &self.asset_id, &self.vs_currency)
    }
}

#[async_trait]
impl PriceSource for QuoteClient {
    async fn fetch(&self) -> Result<Price> {
        let price = self.get_price().await?;
        tracing::debug!(asset = %self.asset_id, price, "Quote received.");
        Ok(price)
    }
}

/// Extracts `body[asset_id][vs_currency]` as a price.
///
/// The expected shape is `{ "<asset-id>": { "<currency>": <number> } }`.
pub fn parse_price(body: &Value, asset_id: &str, vs_currency: &str) -> Result<Price> {
    let price = body
        .get(asset_id)
        .and_then(|quote| quote.get(vs_currency))
        .and_then(Value::as_f64)
        .ok_or_else(|| Error::MissingField {
            asset: asset_id.to_string(),
            currency: vs_currency.to_string(),
        })?;

    if !price.is_finite() || price < 0.0 {
        return Err(Error::InvalidPrice(price));
    }

    Ok(price)
}

// Free function to allow api_client::new usage
pub fn new(settings: &QuoteSettings) -> Result<QuoteClient> {
    QuoteClient::new(settings)
}
