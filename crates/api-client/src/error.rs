// In crates/api-client/src/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to build the API client: {0}")]
    ClientBuildError(String),
    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
    #[error("Quote API returned HTTP {0}")]
    HttpStatus(u16),
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(#[from] serde_json::Error),
    #[error("Quote response has no {currency} price for {asset}")]
    MissingField { asset: String, currency: String },
    #[error("Quote API returned an invalid price: {0}")]
    InvalidPrice(f64),
}

pub type Result<T> = std::result::Result<T, Error>;
