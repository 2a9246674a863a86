// In crates/strategies/src/types.rs

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct RsiSettings {
    /// Number of trailing periods averaged for gains and losses.
    pub window: usize,
}

impl Default for RsiSettings {
    fn default() -> Self {
        Self { window: crate::rsi::DEFAULT_WINDOW }
    }
}
