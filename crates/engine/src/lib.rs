// In crates/engine/src/lib.rs

pub mod error;
pub mod history;

use api_client::PriceSource;
use core_types::{Price, Signal};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use strategies::Strategy;

pub use error::{Error, Result};
pub use history::HistoryBuffer;

/// Number of recent prices included in the per-request diagnostics.
const DIAGNOSTIC_TAIL: usize = 10;

/// The outcome of a successful signal request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    pub price: Price,
    pub signal: Signal,
}

/// Orchestrates price fetch → history append → signal computation.
///
/// The service owns the only `HistoryBuffer` and is its sole writer. It is
/// shared across request handlers behind an `Arc`.
pub struct SignalService {
    source: Arc<dyn PriceSource>,
    strategy: Box<dyn Strategy + Send + Sync>,
    history: Mutex<HistoryBuffer>,
}

impl SignalService {
    pub fn new(
        source: Arc<dyn PriceSource>,
        strategy: Box<dyn Strategy + Send + Sync>,
        capacity: usize,
    ) -> Self {
        Self {
            source,
            strategy,
            history: Mutex::new(HistoryBuffer::new(capacity)),
        }
    }

    /// Handles one signal request.
    ///
    /// A failed fetch leaves the history untouched. On success, append and
    /// snapshot happen under a single lock so concurrent requests never see a
    /// torn buffer; the strategy then runs on the snapshot outside the lock.
    pub async fn handle_signal_request(&self) -> Result<Prediction> {
        let price = self.source.fetch().await?;

        let (snapshot, recent) = {
            let mut history = self.lock_history();
            history.append(price);
            (history.snapshot(), history.latest(DIAGNOSTIC_TAIL))
        };

        let signal = self.strategy.assess(&snapshot);

        tracing::debug!(
            history_len = snapshot.len(),
            recent = ?recent,
            strategy = self.strategy.name(),
            "Price appended to history."
        );
        tracing::info!(price, signal = %signal, "Signal computed.");

        Ok(Prediction { price, signal })
    }

    /// The current history, oldest first.
    pub fn snapshot(&self) -> Vec<Price> {
        self.lock_history().snapshot()
    }

    pub fn history_len(&self) -> usize {
        self.lock_history().len()
    }

    // A panic mid-append cannot leave the buffer outside its bounds, so a
    // poisoned lock is safe to reuse.
    fn lock_history(&self) -> MutexGuard<'_, HistoryBuffer> {
        self.history.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use strategies::RsiStrategy;

    /// Replays a fixed list of prices, then keeps returning the last one.
    struct ScriptedSource {
        prices: Vec<Price>,
        calls: AtomicUsize,
    }

    impl ScriptedSource {
        fn new(prices: Vec<Price>) -> Self {
            Self { prices, calls: AtomicUsize::new(0) }
        }
    }

    #[async_trait]
    impl PriceSource for ScriptedSource {
        async fn fetch(&self) -> api_client::Result<Price> {
            let i = self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.prices[i.min(self.prices.len() - 1)])
        }
    }

    struct FailingSource;

    #[async_trait]
    impl PriceSource for FailingSource {
        async fn fetch(&self) -> api_client::Result<Price> {
            Err(api_client::Error::HttpStatus(503))
        }
    }

    fn service(source: Arc<dyn PriceSource>, capacity: usize) -> SignalService {
        SignalService::new(source, Box::new(RsiStrategy::default()), capacity)
    }

    #[tokio::test]
    async fn test_first_request_is_hold() {
        let svc = service(Arc::new(ScriptedSource::new(vec![0.42])), 100);
        let prediction = svc.handle_signal_request().await.unwrap();
        assert_eq!(prediction, Prediction { price: 0.42, signal: Signal::Hold });
        assert_eq!(svc.history_len(), 1);
    }

    #[tokio::test]
    async fn test_rising_prices_turn_into_sell() {
        let prices: Vec<Price> = (0..14).map(|i| 1.0 + i as f64).collect();
        let svc = service(Arc::new(ScriptedSource::new(prices)), 100);

        let mut signals = Vec::new();
        for _ in 0..14 {
            signals.push(svc.handle_signal_request().await.unwrap().signal);
        }
        assert!(signals[..13].iter().all(|s| *s == Signal::Hold));
        assert_eq!(signals[13], Signal::Sell);
    }

    #[tokio::test]
    async fn test_falling_prices_turn_into_buy() {
        let prices: Vec<Price> = (0..20).map(|i| 100.0 - i as f64).collect();
        let svc = service(Arc::new(ScriptedSource::new(prices)), 100);
        let mut last = None;
        for _ in 0..20 {
            last = Some(svc.handle_signal_request().await.unwrap());
        }
        assert_eq!(last.unwrap().signal, Signal::Buy);
    }

    #[tokio::test]
    async fn test_failure_leaves_history_untouched() {
        let svc = service(Arc::new(FailingSource), 100);
        let before = svc.history_len();
        let err = svc.handle_signal_request().await.unwrap_err();
        assert!(matches!(err, Error::PriceUnavailable(_)));
        assert_eq!(svc.history_len(), before);
        assert!(svc.snapshot().is_empty());
    }

    #[tokio::test]
    async fn test_history_rolls_at_capacity() {
        let prices: Vec<Price> = (0..150).map(|i| i as f64).collect();
        let svc = service(Arc::new(ScriptedSource::new(prices)), 100);
        for _ in 0..150 {
            svc.handle_signal_request().await.unwrap();
        }
        let expected: Vec<Price> = (50..150).map(|i| i as f64).collect();
        assert_eq!(svc.snapshot(), expected);
    }

    #[tokio::test]
    async fn test_concurrent_requests_never_exceed_capacity() {
        let prices: Vec<Price> = (0..64).map(|i| i as f64).collect();
        let svc = Arc::new(service(Arc::new(ScriptedSource::new(prices)), 32));

        let handles: Vec<_> = (0..64)
            .map(|_| {
                let svc = svc.clone();
                tokio::spawn(async move { svc.handle_signal_request().await })
            })
            .collect();

        for result in futures::future::join_all(handles).await {
            assert!(result.unwrap().is_ok());
        }
        assert_eq!(svc.history_len(), 32);
    }
}
