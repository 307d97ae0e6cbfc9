//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application
//! settings. Every value comes from the process environment; `main` loads a
//! `.env` file first when one exists.
//!
//! # Example
//!
//! ```no_run
//! use silverwatch::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     config.init_logging();
//!     let _token = config.require_bot_token()?;
//!     Ok(())
//! }
//! ```

use std::str::FromStr;
use std::time::Duration;

use super::logging::{LogFormat, LoggingConfig};
use crate::adapter::outbound::price::{PriceProviderSettings, ProviderKind};
use crate::application::notifier::Schedule;
use crate::error::ConfigError;

pub const ENV_BOT_TOKEN: &str = "TELEGRAM_BOT_TOKEN";
pub const ENV_METALS_API_KEY: &str = "METALS_API_KEY";
pub const ENV_GOLDAPI_KEY: &str = "GOLDAPI_KEY";
pub const ENV_PROVIDERS: &str = "SILVER_PROVIDERS";
pub const ENV_UPDATE_INTERVAL: &str = "SILVER_UPDATE_INTERVAL_SECS";
pub const ENV_FIRST_DELAY: &str = "SILVER_FIRST_UPDATE_DELAY_SECS";
pub const ENV_FETCH_TIMEOUT: &str = "SILVER_FETCH_TIMEOUT_SECS";
pub const ENV_LOG_LEVEL: &str = "LOG_LEVEL";
pub const ENV_LOG_FORMAT: &str = "LOG_FORMAT";

/// Value shipped in the sample `.env`; treated as unset.
const TOKEN_PLACEHOLDER: &str = "YOUR_BOT_TOKEN_HERE";

/// Main application configuration.
#[derive(Clone, Default)]
pub struct Config {
    /// Telegram bot token. Only `run` needs it.
    pub bot_token: Option<String>,
    pub providers: PriceProviderSettings,
    pub schedule: Schedule,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary variable lookup.
    ///
    /// Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let bot_token = get(ENV_BOT_TOKEN).filter(|t| t != TOKEN_PLACEHOLDER);

        let mut providers = PriceProviderSettings {
            metals_api_key: get(ENV_METALS_API_KEY),
            goldapi_key: get(ENV_GOLDAPI_KEY),
            ..PriceProviderSettings::default()
        };
        if let Some(raw) = get(ENV_PROVIDERS) {
            providers.order = parse_provider_order(&raw)?;
        }
        if let Some(raw) = get(ENV_FETCH_TIMEOUT) {
            providers.timeout = positive_secs(ENV_FETCH_TIMEOUT, &raw)?;
        }

        let mut schedule = Schedule::default();
        if let Some(raw) = get(ENV_UPDATE_INTERVAL) {
            schedule.period = positive_secs(ENV_UPDATE_INTERVAL, &raw)?;
        }
        if let Some(raw) = get(ENV_FIRST_DELAY) {
            schedule.first_delay = Duration::from_secs(secs(ENV_FIRST_DELAY, &raw)?);
        }

        let mut logging = LoggingConfig::default();
        if let Some(level) = get(ENV_LOG_LEVEL) {
            logging.level = level;
        }
        if let Some(format) = get(ENV_LOG_FORMAT) {
            logging.format = LogFormat::parse(&format);
        }

        Ok(Self {
            bot_token,
            providers,
            schedule,
            logging,
        })
    }

    /// The bot token, or the error `run` reports when it is missing.
    pub fn require_bot_token(&self) -> Result<&str, ConfigError> {
        self.bot_token.as_deref().ok_or(ConfigError::MissingField {
            field: ENV_BOT_TOKEN,
        })
    }

    /// Initialize the tracing subscriber from [`logging`](Self::logging).
    pub fn init_logging(&self) {
        self.logging.init();
    }
}

// The token stays out of logs.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("bot_token", &self.bot_token.as_ref().map(|_| "<redacted>"))
            .field("providers", &self.providers)
            .field("schedule", &self.schedule)
            .field("logging", &self.logging)
            .finish()
    }
}

/// Parse a comma-separated provider list, keeping the first occurrence of
/// each name.
fn parse_provider_order(raw: &str) -> Result<Vec<ProviderKind>, ConfigError> {
    let mut order = Vec::new();
    for name in raw.split(',').map(str::trim).filter(|n| !n.is_empty()) {
        let kind = ProviderKind::from_str(name).map_err(|reason| ConfigError::InvalidValue {
            field: ENV_PROVIDERS,
            reason,
        })?;
        if !order.contains(&kind) {
            order.push(kind);
        }
    }

    if order.is_empty() {
        return Err(ConfigError::InvalidValue {
            field: ENV_PROVIDERS,
            reason: "at least one provider is required".into(),
        });
    }
    Ok(order)
}

fn secs(field: &'static str, raw: &str) -> Result<u64, ConfigError> {
    raw.parse::<u64>().map_err(|e| ConfigError::InvalidValue {
        field,
        reason: format!("`{raw}` is not a whole number of seconds: {e}"),
    })
}

fn positive_secs(field: &'static str, raw: &str) -> Result<Duration, ConfigError> {
    match secs(field, raw)? {
        0 => Err(ConfigError::InvalidValue {
            field,
            reason: "must be greater than zero".into(),
        }),
        n => Ok(Duration::from_secs(n)),
    }
}
