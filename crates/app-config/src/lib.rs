// In crates/app-config/src/lib.rs

use config::{Config, ConfigBuilder, Environment, File, builder::DefaultState};

pub mod error;
pub mod types;

// Re-export the most important types for easy access.
pub use error::{Error, Result};
pub use types::{
    AppSettings, HistorySettings, QuoteSettings, ServerSettings, Settings, SignalSettings,
};

pub const DEFAULT_QUOTE_URL: &str = "https://api.coingecko.com/api/v3/simple/price";
pub const DEFAULT_ASSET_ID: &str = "unit0";
pub const DEFAULT_VS_CURRENCY: &str = "usd";
pub const DEFAULT_TIMEOUT_SECS: u64 = 2;
pub const MAX_DATA_SIZE: usize = 100;
pub const DEFAULT_RSI_WINDOW: usize = 14;
/// Upper bound accepted for `history.capacity`.
pub const MAX_HISTORY_CAPACITY: usize = 100_000;

/// Loads the application settings from the `config/` directory.
pub fn load_settings() -> Result<Settings> {
    load_settings_from("config")
}

/// Loads the application settings from various sources.
///
/// This function orchestrates the layered configuration loading:
/// 1. Starts from built-in defaults for every key.
/// 2. Merges a `base.toml` file, if present.
/// 3. Merges an environment-specific file (e.g., `development.toml`), if present.
/// 4. Merges settings from environment variables.
pub fn load_settings_from(config_dir: &str) -> Result<Settings> {
    load_with_env(config_dir, env_source())
}

/// Environment variables such as `APP_SERVER__PORT=9000`.
/// The prefix is `APP` followed by `_`; nested keys are separated by `__`.
fn env_source() -> Environment {
    Environment::with_prefix("APP")
        .prefix_separator("_")
        .separator("__")
}

fn load_with_env(config_dir: &str, env: Environment) -> Result<Settings> {
    // Get the current environment. Default to "development" if not set.
    let environment = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "development".into());

    let settings = with_defaults(Config::builder(), &environment)?
        .add_source(File::with_name(&format!("{}/base", config_dir)).required(false))
        .add_source(File::with_name(&format!("{}/{}", config_dir, environment)).required(false))
        .add_source(env)
        .build()?;

    let settings: Settings = settings.try_deserialize()?;
    settings.validate()?;

    Ok(settings)
}

fn with_defaults(
    builder: ConfigBuilder<DefaultState>,
    environment: &str,
) -> Result<ConfigBuilder<DefaultState>> {
    let builder = builder
        .set_default("app.environment", environment)?
        .set_default("app.log_level", "info")?
        .set_default("quote.base_url", DEFAULT_QUOTE_URL)?
        .set_default("quote.asset_id", DEFAULT_ASSET_ID)?
        .set_default("quote.vs_currency", DEFAULT_VS_CURRENCY)?
        .set_default("quote.timeout_secs", DEFAULT_TIMEOUT_SECS as i64)?
        .set_default("history.capacity", MAX_DATA_SIZE as i64)?
        .set_default("signal.rsi_window", DEFAULT_RSI_WINDOW as i64)?
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 8000_i64)?;
    Ok(builder)
}
