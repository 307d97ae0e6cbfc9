//! api.metals.live payload.
//!
//! `GET /v1/spot/silver` returns an array of `{ "price": f64, "timestamp": n }`
//! objects; the first one is the latest spot.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;

use super::provider::{json_timestamp, ProviderKind};
use crate::domain::PriceQuote;
use crate::error::ProviderError;

#[derive(Deserialize)]
struct Spot {
    price: Decimal,
    #[serde(default)]
    timestamp: Option<serde_json::Value>,
}

pub(super) fn parse(body: &[u8], fetched_at: DateTime<Utc>) -> Result<PriceQuote, ProviderError> {
    let spots: Vec<Spot> = serde_json::from_slice(body)?;
    let spot = spots
        .into_iter()
        .next()
        .ok_or_else(|| ProviderError::Malformed("empty spot list".into()))?;

    let observed_at = spot
        .timestamp
        .as_ref()
        .and_then(json_timestamp)
        .unwrap_or(fetched_at);

    Ok(PriceQuote::new(
        spot.price,
        observed_at,
        ProviderKind::MetalsLive.as_str(),
    ))
}
