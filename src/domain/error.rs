//! Domain validation errors.
//!
//! Returned by `try_new` constructors when a domain invariant would be
//! violated.
//!
//! # Examples
//!
//! ```
//! use silverwatch::domain::AlertThreshold;
//! use silverwatch::domain::error::DomainError;
//! use rust_decimal_macros::dec;
//!
//! let result = AlertThreshold::try_new(dec!(28), dec!(32));
//! assert!(matches!(result, Err(DomainError::ThresholdOrder { .. })));
//! ```

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The high alert threshold must be strictly above the low one.
    #[error("high threshold {high} must be greater than low threshold {low}")]
    ThresholdOrder {
        /// The requested high threshold.
        high: Decimal,
        /// The requested low threshold.
        low: Decimal,
    },

    /// A per-gram rate must be positive to be inverted into a price.
    #[error("rate must be positive, got {rate}")]
    NonPositiveRate {
        /// The rate that was provided.
        rate: Decimal,
    },

    /// The price derived from a rate overflows `Decimal`.
    #[error("rate {rate} converts to a price out of range")]
    RateOutOfRange {
        /// The rate that was provided.
        rate: Decimal,
    },
}
