// In crates/engine/src/history.rs

use core_types::Price;
use std::collections::VecDeque;

/// A bounded FIFO of the most recent prices, oldest first.
#[derive(Debug, Clone)]
pub struct HistoryBuffer {
    prices: VecDeque<Price>,
    capacity: usize,
}

impl HistoryBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            prices: VecDeque::with_capacity(capacity.saturating_add(1)),
            capacity,
        }
    }

    /// Appends `price`, evicting the oldest entry once the buffer is over capacity.
    pub fn append(&mut self, price: Price) {
        self.prices.push_back(price);
        while self.prices.len() > self.capacity {
            self.prices.pop_front();
        }
    }

    /// An owned copy of the current contents.
    pub fn snapshot(&self) -> Vec<Price> {
        self.prices.iter().copied().collect()
    }

    /// The last `n` prices (fewer if the buffer is shorter), oldest first.
    pub fn latest(&self, n: usize) -> Vec<Price> {
        let skip = self.prices.len().saturating_sub(n);
        self.prices.iter().skip(skip).copied().collect()
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty() {
        let buffer = HistoryBuffer::new(100);
        assert!(buffer.is_empty());
        assert_eq!(buffer.capacity(), 100);
        assert!(buffer.snapshot().is_empty());
    }

    #[test]
    fn test_keeps_last_capacity_prices_in_order() {
        let mut buffer = HistoryBuffer::new(100);
        for i in 0..250 {
            buffer.append(i as f64);
            assert!(buffer.len() <= 100);
        }
        let expected: Vec<Price> = (150..250).map(|i| i as f64).collect();
        assert_eq!(buffer.len(), 100);
        assert_eq!(buffer.snapshot(), expected);
    }

    #[test]
    fn test_below_capacity_keeps_everything() {
        let mut buffer = HistoryBuffer::new(5);
        buffer.append(1.0);
        buffer.append(2.0);
        assert_eq!(buffer.snapshot(), vec![1.0, 2.0]);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut buffer = HistoryBuffer::new(3);
        buffer.append(1.0);
        let snapshot = buffer.snapshot();
        buffer.append(2.0);
        assert_eq!(snapshot, vec![1.0]);
        assert_eq!(buffer.len(), 2);
    }

    #[test]
    fn test_latest() {
        let mut buffer = HistoryBuffer::new(100);
        for i in 0..25 {
            buffer.append(i as f64);
        }
        assert_eq!(buffer.latest(3), vec![22.0, 23.0, 24.0]);
        assert_eq!(buffer.latest(50).len(), 25);
        assert!(buffer.latest(0).is_empty());
    }

    #[test]
    fn test_zero_capacity_holds_nothing() {
        let mut buffer = HistoryBuffer::new(0);
        buffer.append(1.0);
        assert!(buffer.is_empty());
    }
}
