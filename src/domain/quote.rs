//! Canonical silver price record.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use super::error::DomainError;

/// Grams in one troy ounce.
pub const GRAMS_PER_TROY_OUNCE: Decimal = dec!(31.1035);

/// Decimal places kept on a normalized price.
pub const PRICE_DECIMALS: u32 = 2;

/// Quote currency. Every provider is queried for USD.
pub const CURRENCY: &str = "USD";

/// Quote unit.
pub const UNIT: &str = "troy ounce";

/// A normalized silver spot quote.
///
/// Immutable once constructed. The price is rounded to [`PRICE_DECIMALS`]
/// places at construction, so every consumer sees the same value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceQuote {
    price: Decimal,
    observed_at: DateTime<Utc>,
    source: &'static str,
}

impl PriceQuote {
    /// Build a quote from a USD-per-troy-ounce price.
    #[must_use]
    pub fn new(price: Decimal, observed_at: DateTime<Utc>, source: &'static str) -> Self {
        Self {
            price: price.round_dp(PRICE_DECIMALS),
            observed_at,
            source,
        }
    }

    /// Build a quote from a metal-per-USD rate expressed in grams.
    ///
    /// The rate is inverted to USD per gram, then scaled to a troy ounce.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::NonPositiveRate`] if `rate <= 0`, or
    /// [`DomainError::RateOutOfRange`] if the converted price does not fit
    /// in a `Decimal`.
    pub fn from_grams_rate(
        rate: Decimal,
        observed_at: DateTime<Utc>,
        source: &'static str,
    ) -> Result<Self, DomainError> {
        if rate <= Decimal::ZERO {
            return Err(DomainError::NonPositiveRate { rate });
        }
        let price = Decimal::ONE
            .checked_div(rate)
            .and_then(|per_gram| per_gram.checked_mul(GRAMS_PER_TROY_OUNCE))
            .ok_or(DomainError::RateOutOfRange { rate })?;
        Ok(Self::new(price, observed_at, source))
    }

    /// USD per troy ounce, rounded to cents.
    #[must_use]
    pub const fn price(&self) -> Decimal {
        self.price
    }

    #[must_use]
    pub const fn currency(&self) -> &'static str {
        CURRENCY
    }

    #[must_use]
    pub const fn unit(&self) -> &'static str {
        UNIT
    }

    /// When the provider observed the price.
    #[must_use]
    pub const fn observed_at(&self) -> DateTime<Utc> {
        self.observed_at
    }

    /// Name of the provider that produced this quote.
    #[must_use]
    pub const fn source(&self) -> &'static str {
        self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn new_rounds_to_two_places() {
        let quote = PriceQuote::new(dec!(31.256789), at(), "test");
        assert_eq!(quote.price(), dec!(31.26));
    }

    #[test]
    fn new_keeps_metadata() {
        let quote = PriceQuote::new(dec!(30), at(), "metals_live");
        assert_eq!(quote.currency(), "USD");
        assert_eq!(quote.unit(), "troy ounce");
        assert_eq!(quote.observed_at(), at());
        assert_eq!(quote.source(), "metals_live");
    }

    #[test]
    fn grams_rate_converts_to_troy_ounce() {
        // 0.5 per USD -> 2.0 USD/g -> 62.207 USD/ozt
        let quote = PriceQuote::from_grams_rate(dec!(0.5), at(), "metals_api").unwrap();
        assert_eq!(quote.price(), dec!(62.21));
    }

    #[test]
    fn grams_rate_realistic_value() {
        // ~1.0 USD/g
        let quote = PriceQuote::from_grams_rate(dec!(1), at(), "metals_api").unwrap();
        assert_eq!(quote.price(), dec!(31.10));
    }

    #[test]
    fn grams_rate_rejects_zero_and_negative() {
        assert_eq!(
            PriceQuote::from_grams_rate(Decimal::ZERO, at(), "x"),
            Err(DomainError::NonPositiveRate {
                rate: Decimal::ZERO
            })
        );
        assert!(PriceQuote::from_grams_rate(dec!(-0.5), at(), "x").is_err());
    }

    #[test]
    fn grams_rate_too_small_to_invert_is_out_of_range() {
        let rate = dec!(0.0000000000000000000000000001);
        assert_eq!(
            PriceQuote::from_grams_rate(rate, at(), "x"),
            Err(DomainError::RateOutOfRange { rate })
        );
    }
}
