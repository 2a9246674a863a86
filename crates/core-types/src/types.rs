// In crates/core-types/src/types.rs

use serde::Serialize;
use std::fmt;

/// A quoted price in the target currency (USD).
///
/// Prices carry no timestamp; their position in the history is the only ordering.
pub type Price = f64;

/// The discretized trading recommendation produced by a strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Signal {
    Buy,
    Sell,
    #[default]
    Hold,
}

impl Signal {
    /// The wire representation, identical to the serde form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Signal::Buy => "BUY",
            Signal::Sell => "SELL",
            Signal::Hold => "HOLD",
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
