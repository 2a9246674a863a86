// In crates/strategies/src/lib.rs

use core_types::{Price, Signal};

pub mod rsi;
pub mod types;

pub use rsi::{RsiStrategy, classify, compute_signal, relative_strength_index};

/// The universal interface for a trading strategy.
///
/// A strategy turns an ordered price history (oldest first) into a `Signal`.
/// It must be a pure function of its input: assessing the same history twice
/// yields the same signal.
pub trait Strategy {
    /// The name of the strategy.
    fn name(&self) -> &'static str;

    fn assess(&self, prices: &[Price]) -> Signal;
}
