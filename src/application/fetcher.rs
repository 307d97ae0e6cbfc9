//! Ordered fallback across price sources.

use std::sync::Arc;

use tracing::{debug, error, warn};

use crate::domain::PriceQuote;
use crate::error::FetchError;
use crate::port::outbound::price::PriceSource;

/// Tries each source in priority order and returns the first quote.
///
/// A failing source is logged and skipped; it is not retried within the
/// same call.
pub struct PriceFetcher {
    sources: Vec<Arc<dyn PriceSource>>,
}

impl PriceFetcher {
    #[must_use]
    pub fn new(sources: Vec<Arc<dyn PriceSource>>) -> Self {
        Self { sources }
    }

    /// Number of configured sources.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Fetch one quote.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::AllProvidersFailed`] when no source produced a
    /// quote. Callers treat this as "temporarily unavailable".
    pub async fn fetch_price(&self) -> Result<PriceQuote, FetchError> {
        for source in &self.sources {
            match source.fetch().await {
                Ok(quote) => {
                    debug!(
                        provider = source.name(),
                        price = %quote.price(),
                        "Fetched silver price"
                    );
                    return Ok(quote);
                }
                Err(e) => {
                    warn!(provider = source.name(), error = %e, "Price provider failed");
                }
            }
        }

        error!(attempted = self.sources.len(), "All price providers failed");
        Err(FetchError::AllProvidersFailed {
            attempted: self.sources.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::port::outbound::price::tests::StaticSource;
    use rust_decimal_macros::dec;

    fn fetcher(sources: &[Arc<StaticSource>]) -> PriceFetcher {
        PriceFetcher::new(
            sources
                .iter()
                .map(|s| Arc::clone(s) as Arc<dyn PriceSource>)
                .collect(),
        )
    }

    #[tokio::test]
    async fn first_success_wins() {
        let a = Arc::new(StaticSource::ok("a", dec!(30.10)));
        let b = Arc::new(StaticSource::ok("b", dec!(99)));

        let quote = fetcher(&[a.clone(), b.clone()]).fetch_price().await.unwrap();

        assert_eq!(quote.price(), dec!(30.10));
        assert_eq!(quote.source(), "a");
        assert_eq!(b.calls(), 0);
    }

    #[tokio::test]
    async fn falls_through_to_next_provider() {
        let a = Arc::new(StaticSource::failing("a"));
        let b = Arc::new(StaticSource::ok("b", dec!(62.21)));

        let quote = fetcher(&[a.clone(), b.clone()]).fetch_price().await.unwrap();

        assert_eq!(quote.source(), "b");
        assert_eq!(quote.price(), dec!(62.21));
        assert_eq!(a.calls(), 1);
        assert_eq!(b.calls(), 1);
    }

    #[tokio::test]
    async fn all_failing_reports_failure() {
        let sources = [
            Arc::new(StaticSource::failing("a")),
            Arc::new(StaticSource::failing("b")),
            Arc::new(StaticSource::failing("c")),
        ];

        let err = fetcher(&sources).fetch_price().await.unwrap_err();

        assert_eq!(err, FetchError::AllProvidersFailed { attempted: 3 });
        for source in &sources {
            assert_eq!(source.calls(), 1, "each provider is tried exactly once");
        }
    }

    #[tokio::test]
    async fn no_sources_reports_failure() {
        let fetcher = PriceFetcher::new(Vec::new());
        assert!(fetcher.is_empty());
        assert_eq!(
            fetcher.fetch_price().await,
            Err(FetchError::AllProvidersFailed { attempted: 0 })
        );
    }
}
