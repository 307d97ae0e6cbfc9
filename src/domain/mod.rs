//! Messaging- and provider-agnostic domain types.

pub mod error;

mod id;
mod quote;
mod threshold;

pub use id::UserId;
pub use quote::{PriceQuote, CURRENCY, GRAMS_PER_TROY_OUNCE, PRICE_DECIMALS, UNIT};
pub use threshold::{AlertThreshold, Breach};
