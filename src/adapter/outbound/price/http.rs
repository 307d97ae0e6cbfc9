//! reqwest-backed price source.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use reqwest::{Client, RequestBuilder};
use tracing::{debug, info};
use url::Url;

use super::provider::{descriptor, Auth, ProviderDescriptor};
use super::settings::PriceProviderSettings;
use crate::domain::PriceQuote;
use crate::error::ProviderError;
use crate::port::outbound::price::PriceSource;

/// One provider reached over HTTP.
pub struct HttpPriceSource {
    client: Client,
    descriptor: &'static ProviderDescriptor,
    url: String,
    credential: Option<String>,
    timeout: Duration,
}

impl HttpPriceSource {
    #[must_use]
    pub fn new(
        client: Client,
        descriptor: &'static ProviderDescriptor,
        credential: Option<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            client,
            descriptor,
            url: descriptor.url.to_string(),
            credential,
            timeout,
        }
    }

    /// Point the source at a different base URL (local test servers).
    #[cfg(test)]
    fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    fn request(&self) -> Result<RequestBuilder, ProviderError> {
        let mut url = Url::parse(&self.url)
            .map_err(|e| ProviderError::Malformed(format!("invalid provider url: {e}")))?;
        {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in self.descriptor.query {
                pairs.append_pair(key, value);
            }
            if let (Auth::QueryKey { param }, Some(key)) = (self.descriptor.auth, &self.credential)
            {
                pairs.append_pair(param, key.as_str());
            }
        }
        // An empty query_pairs_mut() still leaves a trailing '?'.
        if url.query() == Some("") {
            url.set_query(None);
        }

        let mut request = self.client.get(url).timeout(self.timeout);
        if let Some(agent) = self.descriptor.user_agent {
            request = request.header(reqwest::header::USER_AGENT, agent);
        }
        if let (Auth::HeaderKey { header }, Some(key)) = (self.descriptor.auth, &self.credential) {
            request = request.header(header, key.as_str());
        }
        Ok(request)
    }
}

/// Drop the URL from transport errors; it may carry an API key.
fn redact(err: reqwest::Error) -> ProviderError {
    ProviderError::Http(err.without_url())
}

#[async_trait]
impl PriceSource for HttpPriceSource {
    fn name(&self) -> &'static str {
        self.descriptor.name()
    }

    async fn fetch(&self) -> Result<PriceQuote, ProviderError> {
        let response = self.request()?.send().await.map_err(redact)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(redact)?;
        (self.descriptor.parse)(&body, Utc::now())
    }
}

/// Build the configured provider chain.
///
/// Credential-gated providers without a key are left out.
#[must_use]
pub fn build_sources(client: &Client, settings: &PriceProviderSettings) -> Vec<Arc<dyn PriceSource>> {
    let mut sources: Vec<Arc<dyn PriceSource>> = Vec::with_capacity(settings.order.len());

    for &kind in &settings.order {
        let descriptor = descriptor(kind);
        if !settings.is_usable(kind, descriptor.auth) {
            debug!(provider = %kind, "Skipping provider without credential");
            continue;
        }
        sources.push(Arc::new(HttpPriceSource::new(
            client.clone(),
            descriptor,
            settings.credential(kind).map(str::to_string),
            settings.timeout,
        )));
    }

    info!(
        providers = ?sources.iter().map(|s| s.name()).collect::<Vec<_>>(),
        "Price providers configured"
    );
    sources
}
