// In crates/web-server/src/types.rs

use core_types::{Price, Signal};
use engine::Prediction;
use serde::Serialize;

/// The body of `GET /predict`.
///
/// Both variants are sent with status 200; failures are reported in-band.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum PredictResponse {
    Success { price: Price, signal: Signal },
    Failure { error: String },
}

impl From<engine::Result<Prediction>> for PredictResponse {
    fn from(result: engine::Result<Prediction>) -> Self {
        match result {
            Ok(Prediction { price, signal }) => PredictResponse::Success { price, signal },
            Err(e) => PredictResponse::Failure { error: e.to_string() },
        }
    }
}
