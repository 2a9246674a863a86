// In crates/strategies/src/rsi.rs

use crate::types::RsiSettings;
use crate::{Signal, Strategy};
use core_types::Price;

pub const DEFAULT_WINDOW: usize = 14;

/// RSI strictly below this value is read as oversold.
pub const RSI_OVERSOLD: f64 = 30.0;
/// RSI strictly above this value is read as overbought.
pub const RSI_OVERBOUGHT: f64 = 70.0;

/// Computes the RSI of `prices` at the most recent observation.
///
/// Gains and losses are simple means over the trailing `window` price changes.
/// When the history holds exactly `window` prices only `window - 1` changes
/// exist, and the mean is taken over those.
///
/// Returns `None` when the value is undefined: fewer than `window` prices,
/// no price change at all, or a history without any movement.
pub fn relative_strength_index(prices: &[Price], window: usize) -> Option<f64> {
    if window == 0 || prices.len() < window || prices.len() < 2 {
        return None;
    }

    let deltas = prices.len() - 1;
    let start = prices.len() - window.min(deltas) - 1;
    let tail = &prices[start..];

    let (gain_sum, loss_sum) = tail.windows(2).fold((0.0_f64, 0.0_f64), |(gain, loss), pair| {
        let delta = pair[1] - pair[0];
        (gain + delta.max(0.0), loss + (-delta).max(0.0))
    });

    let periods = (tail.len() - 1) as f64;
    let avg_gain = gain_sum / periods;
    let avg_loss = loss_sum / periods;

    if !avg_gain.is_finite() || !avg_loss.is_finite() {
        return None;
    }
    if avg_gain == 0.0 && avg_loss == 0.0 {
        return None;
    }
    if avg_loss == 0.0 {
        return Some(100.0);
    }

    let rsi = 100.0 * avg_gain / (avg_gain + avg_loss);
    rsi.is_finite().then_some(rsi)
}

/// Maps an RSI value onto a signal. The thresholds themselves are `Hold`.
pub fn classify(rsi: f64) -> Signal {
    if rsi < RSI_OVERSOLD {
        Signal::Buy
    } else if rsi > RSI_OVERBOUGHT {
        Signal::Sell
    } else {
        Signal::Hold
    }
}

/// Computes the trade signal for `prices`. Undefined RSI resolves to `Hold`.
pub fn compute_signal(prices: &[Price], window: usize) -> Signal {
    relative_strength_index(prices, window)
        .map(classify)
        .unwrap_or(Signal::Hold)
}

/// The stateless RSI threshold strategy.
#[derive(Debug, Clone)]
pub struct RsiStrategy {
    settings: RsiSettings,
}

impl RsiStrategy {
    pub fn new(settings: RsiSettings) -> Self {
        Self { settings }
    }

    pub fn window(&self) -> usize {
        self.settings.window
    }
}

impl Default for RsiStrategy {
    fn default() -> Self {
        Self::new(RsiSettings::default())
    }
}

impl Strategy for RsiStrategy {
    fn name(&self) -> &'static str {
        "RsiThreshold"
    }

    fn assess(&self, prices: &[Price]) -> Signal {
        compute_signal(prices, self.settings.window)
    }
}
