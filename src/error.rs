use thiserror::Error;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

/// Failure of a single price provider.
///
/// Recovered locally by the fetcher, which falls through to the next provider.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status}")]
    Status { status: u16 },

    #[error("malformed payload: {0}")]
    Malformed(String),

    #[error("provider reported failure: {0}")]
    Rejected(String),
}

impl From<serde_json::Error> for ProviderError {
    fn from(err: serde_json::Error) -> Self {
        Self::Malformed(err.to_string())
    }
}

/// Every configured provider failed to produce a quote.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("all price providers failed ({attempted} attempted)")]
    AllProvidersFailed { attempted: usize },
}

/// Failure to push a message to one user.
#[derive(Error, Debug, Clone)]
#[error("failed to deliver message to {user}: {reason}")]
pub struct DeliveryError {
    pub user: crate::domain::UserId,
    pub reason: String,
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
