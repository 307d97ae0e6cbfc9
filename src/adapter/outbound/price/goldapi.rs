//! goldapi.io payload.
//!
//! `GET /api/XAG/USD` returns `{ "price": f64, ... }`. The timestamp in the
//! payload is not used; the fetch time stands in for it.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;

use super::provider::ProviderKind;
use crate::domain::PriceQuote;
use crate::error::ProviderError;

#[derive(Deserialize)]
struct Spot {
    price: Decimal,
}

pub(super) fn parse(body: &[u8], fetched_at: DateTime<Utc>) -> Result<PriceQuote, ProviderError> {
    let spot: Spot = serde_json::from_slice(body)?;
    Ok(PriceQuote::new(
        spot.price,
        fetched_at,
        ProviderKind::GoldApi.as_str(),
    ))
}
