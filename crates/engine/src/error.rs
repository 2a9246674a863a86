// In crates/engine/src/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Price data unavailable: {0}")]
    PriceUnavailable(#[from] api_client::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
