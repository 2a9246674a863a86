// In crates/app-config/src/types.rs

use serde::Deserialize;

use crate::{Error, MAX_HISTORY_CAPACITY, Result};

#[derive(Deserialize, Debug, Clone)]
pub struct Settings {
    /// The application's general settings.
    pub app: AppSettings,
    /// Settings for the upstream quote API.
    pub quote: QuoteSettings,
    pub history: HistorySettings,
    pub signal: SignalSettings,
    pub server: ServerSettings,
}

#[derive(Deserialize, Debug, Clone)]
pub struct AppSettings {
    /// The environment the application is running in (e.g., "development", "production").
    pub environment: String,
    /// The log level for the application.
    pub log_level: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct QuoteSettings {
    /// The `simple/price` endpoint of the quote API.
    pub base_url: String,
    /// The asset identifier as known to the quote API (e.g., "unit0").
    pub asset_id: String,
    /// The currency the price is quoted in (e.g., "usd").
    pub vs_currency: String,
    /// Upper bound on a single outbound price request.
    pub timeout_secs: u64,
}

#[derive(Deserialize, Debug, Clone)]
pub struct HistorySettings {
    /// Maximum number of prices kept in the rolling history.
    pub capacity: usize,
}

#[derive(Deserialize, Debug, Clone)]
pub struct SignalSettings {
    /// Number of periods averaged by the RSI.
    pub rsi_window: usize,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Settings {
    /// Rejects settings the service could not run with.
    pub fn validate(&self) -> Result<()> {
        if self.history.capacity == 0 {
            return Err(Error::Invalid("history.capacity must be greater than zero".into()));
        }
        if self.history.capacity > MAX_HISTORY_CAPACITY {
            return Err(Error::Invalid(format!(
                "history.capacity ({}) must not exceed {}",
                self.history.capacity, MAX_HISTORY_CAPACITY
            )));
        }
        if self.signal.rsi_window == 0 {
            return Err(Error::Invalid("signal.rsi_window must be greater than zero".into()));
        }
        // A window larger than the history would pin the signal to HOLD forever.
        if self.signal.rsi_window > self.history.capacity {
            return Err(Error::Invalid(format!(
                "signal.rsi_window ({}) must not exceed history.capacity ({})",
                self.signal.rsi_window, self.history.capacity
            )));
        }
        if self.quote.timeout_secs == 0 {
            return Err(Error::Invalid("quote.timeout_secs must be greater than zero".into()));
        }
        if self.quote.asset_id.trim().is_empty() {
            return Err(Error::Invalid("quote.asset_id must not be empty".into()));
        }
        if self.quote.vs_currency.trim().is_empty() {
            return Err(Error::Invalid("quote.vs_currency must not be empty".into()));
        }
        Ok(())
    }
}
