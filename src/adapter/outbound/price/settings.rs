//! Price provider settings.

use std::time::Duration;

use super::provider::{Auth, ProviderKind};

/// Default per-request timeout for provider calls.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Which providers to try, in what order, with which credentials.
#[derive(Clone, PartialEq, Eq)]
pub struct PriceProviderSettings {
    /// Providers in priority order.
    pub order: Vec<ProviderKind>,
    /// Key for metals-api.com.
    pub metals_api_key: Option<String>,
    /// Key for goldapi.io.
    pub goldapi_key: Option<String>,
    /// Timeout applied to each provider attempt independently.
    pub timeout: Duration,
}

impl PriceProviderSettings {
    /// Credential configured for a provider, if any.
    #[must_use]
    pub fn credential(&self, kind: ProviderKind) -> Option<&str> {
        match kind {
            ProviderKind::MetalsLive => None,
            ProviderKind::MetalsApi => self.metals_api_key.as_deref(),
            ProviderKind::GoldApi => self.goldapi_key.as_deref(),
        }
    }

    /// True when the provider can be called with the current credentials.
    #[must_use]
    pub fn is_usable(&self, kind: ProviderKind, auth: Auth) -> bool {
        !auth.requires_credential() || self.credential(kind).is_some()
    }
}

impl Default for PriceProviderSettings {
    fn default() -> Self {
        Self {
            order: ProviderKind::DEFAULT_ORDER.to_vec(),
            metals_api_key: None,
            goldapi_key: None,
            timeout: DEFAULT_FETCH_TIMEOUT,
        }
    }
}

// Keys stay out of logs.
impl std::fmt::Debug for PriceProviderSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let redact = |key: &Option<String>| key.as_ref().map(|_| "<redacted>");
        f.debug_struct("PriceProviderSettings")
            .field("order", &self.order)
            .field("metals_api_key", &redact(&self.metals_api_key))
            .field("goldapi_key", &redact(&self.goldapi_key))
            .field("timeout", &self.timeout)
            .finish()
    }
}
