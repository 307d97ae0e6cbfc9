//! Price source port.

use async_trait::async_trait;

use crate::domain::PriceQuote;
use crate::error::ProviderError;

/// A single upstream provider of silver spot quotes.
///
/// Implementations perform at most one attempt per call; fallback across
/// providers is the fetcher's job.
#[async_trait]
pub trait PriceSource: Send + Sync {
    /// Provider name used in logs.
    fn name(&self) -> &'static str;

    /// Fetch and normalize one quote.
    async fn fetch(&self) -> Result<PriceQuote, ProviderError>;
}
