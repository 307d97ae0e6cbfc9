//! Per-user alert thresholds.

use rust_decimal::Decimal;
use serde::Serialize;

use super::error::DomainError;

/// A pair of alert bounds with `high > low`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AlertThreshold {
    high: Decimal,
    low: Decimal,
}

/// Which bound a price crossed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breach {
    /// Price at or above the high bound (carries the bound).
    Above(Decimal),
    /// Price at or below the low bound (carries the bound).
    Below(Decimal),
}

impl AlertThreshold {
    /// Create a threshold, enforcing `high > low`.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::ThresholdOrder`] when `high <= low`.
    pub fn try_new(high: Decimal, low: Decimal) -> Result<Self, DomainError> {
        if high <= low {
            return Err(DomainError::ThresholdOrder { high, low });
        }
        Ok(Self { high, low })
    }

    #[must_use]
    pub const fn high(&self) -> Decimal {
        self.high
    }

    #[must_use]
    pub const fn low(&self) -> Decimal {
        self.low
    }

    /// Compare a price against the bounds. The high bound is checked first.
    #[must_use]
    pub fn check(&self, price: Decimal) -> Option<Breach> {
        if price >= self.high {
            Some(Breach::Above(self.high))
        } else if price <= self.low {
            Some(Breach::Below(self.low))
        } else {
            None
        }
    }
}
