//! Provider table.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};

use crate::domain::PriceQuote;
use crate::error::ProviderError;

use super::{goldapi, metals_api, metals_live};

/// Known silver price providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderKind {
    /// api.metals.live, free and unauthenticated.
    MetalsLive,
    /// metals-api.com, API key in the query string.
    MetalsApi,
    /// goldapi.io, API key in a request header.
    GoldApi,
}

impl ProviderKind {
    /// Default priority order.
    pub const DEFAULT_ORDER: [Self; 3] = [Self::MetalsLive, Self::MetalsApi, Self::GoldApi];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MetalsLive => "metals_live",
            Self::MetalsApi => "metals_api",
            Self::GoldApi => "goldapi",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "metals_live" | "metals.live" => Ok(Self::MetalsLive),
            "metals_api" | "metals-api" | "metals-api.com" => Ok(Self::MetalsApi),
            "goldapi" | "goldapi.io" | "gold_api" => Ok(Self::GoldApi),
            other => Err(format!(
                "unknown provider `{other}` (use: metals_live, metals_api, goldapi)"
            )),
        }
    }
}

/// How a provider expects its credential.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Auth {
    /// No credential.
    None,
    /// Credential appended as a query parameter.
    QueryKey { param: &'static str },
    /// Credential sent in a request header.
    HeaderKey { header: &'static str },
}

impl Auth {
    #[must_use]
    pub const fn requires_credential(self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Payload parser: raw body plus fetch time to a normalized quote.
pub type ParseFn = fn(&[u8], DateTime<Utc>) -> Result<PriceQuote, ProviderError>;

/// Static description of one upstream.
pub struct ProviderDescriptor {
    pub kind: ProviderKind,
    pub url: &'static str,
    /// Fixed query parameters appended before any credential.
    pub query: &'static [(&'static str, &'static str)],
    pub auth: Auth,
    pub user_agent: Option<&'static str>,
    pub parse: ParseFn,
}

impl fmt::Debug for ProviderDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderDescriptor")
            .field("kind", &self.kind)
            .field("url", &self.url)
            .field("auth", &self.auth)
            .finish_non_exhaustive()
    }
}

impl ProviderDescriptor {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.kind.as_str()
    }
}

static METALS_LIVE: ProviderDescriptor = ProviderDescriptor {
    kind: ProviderKind::MetalsLive,
    url: "https://api.metals.live/v1/spot/silver",
    query: &[],
    auth: Auth::None,
    user_agent: Some("Mozilla/5.0"),
    parse: metals_live::parse,
};

static METALS_API: ProviderDescriptor = ProviderDescriptor {
    kind: ProviderKind::MetalsApi,
    url: "https://metals-api.com/api/latest",
    query: &[("base", "USD"), ("symbols", "XAG")],
    auth: Auth::QueryKey {
        param: "access_key",
    },
    user_agent: None,
    parse: metals_api::parse,
};

static GOLDAPI: ProviderDescriptor = ProviderDescriptor {
    kind: ProviderKind::GoldApi,
    url: "https://www.goldapi.io/api/XAG/USD",
    query: &[],
    auth: Auth::HeaderKey {
        header: "x-access-token",
    },
    user_agent: None,
    parse: goldapi::parse,
};

/// Look up the descriptor for a provider.
#[must_use]
pub fn descriptor(kind: ProviderKind) -> &'static ProviderDescriptor {
    match kind {
        ProviderKind::MetalsLive => &METALS_LIVE,
        ProviderKind::MetalsApi => &METALS_API,
        ProviderKind::GoldApi => &GOLDAPI,
    }
}

/// Interpret a provider's unix timestamp.
///
/// Values above 10^12 are milliseconds, anything else is seconds.
pub(super) fn unix_timestamp(raw: i64) -> Option<DateTime<Utc>> {
    if raw.unsigned_abs() >= 1_000_000_000_000 {
        DateTime::from_timestamp_millis(raw)
    } else {
        DateTime::from_timestamp(raw, 0)
    }
}

/// Read a JSON number that may arrive as integer or float.
pub(super) fn json_timestamp(value: &serde_json::Value) -> Option<DateTime<Utc>> {
    let raw = value
        .as_i64()
        .or_else(|| value.as_f64().map(|f| f as i64))?;
    unix_timestamp(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn kind_parses_names_and_aliases() {
        let parse = |s: &str| s.parse::<ProviderKind>();
        assert_eq!(parse("metals_live"), Ok(ProviderKind::MetalsLive));
        assert_eq!(parse("metals.live"), Ok(ProviderKind::MetalsLive));
        assert_eq!(parse("metals-api"), Ok(ProviderKind::MetalsApi));
        assert_eq!(parse(" GoldAPI "), Ok(ProviderKind::GoldApi));
        assert_eq!(parse("goldapi.io"), Ok(ProviderKind::GoldApi));
    }

    #[test]
    fn kind_rejects_unknown() {
        let err = "kitco".parse::<ProviderKind>().unwrap_err();
        assert!(err.contains("kitco"));
    }

    #[test]
    fn kind_display_matches_as_str() {
        for kind in ProviderKind::DEFAULT_ORDER {
            assert_eq!(kind.to_string(), kind.as_str());
            assert_eq!(kind.as_str().parse::<ProviderKind>(), Ok(kind));
        }
    }

    #[test]
    fn descriptors_match_their_kind() {
        for kind in ProviderKind::DEFAULT_ORDER {
            let d = descriptor(kind);
            assert_eq!(d.kind, kind);
            assert_eq!(d.name(), kind.as_str());
            assert!(d.url.starts_with("https://"));
        }
    }

    #[test]
    fn only_metals_live_is_unauthenticated() {
        assert!(!descriptor(ProviderKind::MetalsLive).auth.requires_credential());
        assert!(descriptor(ProviderKind::MetalsApi).auth.requires_credential());
        assert!(descriptor(ProviderKind::GoldApi).auth.requires_credential());
    }

    #[test]
    fn unix_timestamp_seconds_and_millis() {
        let expected = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        assert_eq!(unix_timestamp(1_714_564_800), Some(expected));
        assert_eq!(unix_timestamp(1_714_564_800_000), Some(expected));
    }

    #[test]
    fn unix_timestamp_extreme_values_are_none() {
        assert_eq!(unix_timestamp(i64::MIN), None);
        assert_eq!(unix_timestamp(i64::MAX), None);
        assert_eq!(json_timestamp(&serde_json::json!(-1e30)), None);
    }

    #[test]
    fn json_timestamp_accepts_float() {
        let value = serde_json::json!(1_714_564_800.5);
        assert_eq!(
            json_timestamp(&value),
            Some(Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap())
        );
        assert_eq!(json_timestamp(&serde_json::json!("soon")), None);
    }
}
