// In crates/api-client/src/types.rs

use reqwest::Client;
use std::time::Duration;

/// The client for the quote API's `simple/price` endpoint.
#[derive(Debug, Clone)]
pub struct QuoteClient {
    /// The persistent HTTP client, built with the request timeout.
    pub http_client: Client,
    /// The full URL of the `simple/price` endpoint.
    pub base_url: String,
    /// The asset identifier queried on every request.
    pub asset_id: String,
    /// The currency the price is quoted in.
    pub vs_currency: String,
    pub timeout: Duration,
}
