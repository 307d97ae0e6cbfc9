//! metals-api.com payload.
//!
//! `GET /api/latest?base=USD&symbols=XAG` returns
//! `{ "success": bool, "timestamp": n, "rates": { "XAG": f64 } }` where the
//! rate is grams of silver per USD.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;

use super::provider::{unix_timestamp, ProviderKind};
use crate::domain::PriceQuote;
use crate::error::ProviderError;

#[derive(Deserialize)]
struct Latest {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    timestamp: Option<i64>,
    #[serde(default)]
    rates: HashMap<String, Decimal>,
    #[serde(default)]
    error: Option<ApiError>,
}

#[derive(Deserialize)]
struct ApiError {
    #[serde(default)]
    code: Option<i64>,
    #[serde(default)]
    info: Option<String>,
}

pub(super) fn parse(body: &[u8], fetched_at: DateTime<Utc>) -> Result<PriceQuote, ProviderError> {
    let latest: Latest = serde_json::from_slice(body)?;

    if !latest.success {
        let reason = match latest.error {
            Some(ApiError { code, info }) => format!(
                "code {}: {}",
                code.map_or_else(|| "?".to_string(), |c| c.to_string()),
                info.unwrap_or_default()
            ),
            None => "success=false".to_string(),
        };
        return Err(ProviderError::Rejected(reason));
    }

    let rate = *latest
        .rates
        .get("XAG")
        .ok_or_else(|| ProviderError::Malformed("missing rates.XAG".into()))?;

    let observed_at = latest
        .timestamp
        .and_then(unix_timestamp)
        .unwrap_or(fetched_at);

    PriceQuote::from_grams_rate(rate, observed_at, ProviderKind::MetalsApi.as_str())
        .map_err(|e| ProviderError::Malformed(e.to_string()))
}
