//! Command router.
//!
//! Maps parsed commands to handlers that read and write the subscription
//! store and call the price fetcher, then returns the reply text.

use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use chrono::Local;
use rust_decimal::Decimal;
use thiserror::Error;
use tracing::{debug, info};

use super::command::{parse_command, Command, CommandParseError};
use super::fetcher::PriceFetcher;
use super::format;
use super::store::SubscriptionStore;
use crate::domain::error::DomainError;
use crate::domain::{AlertThreshold, UserId};

/// Why `/alert` arguments were rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlertArgsError {
    #[error("expected 2 arguments, got {0}")]
    WrongCount(usize),

    #[error("`{0}` is not a number")]
    NotANumber(String),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Validate `/alert <high> <low>` arguments into a threshold.
///
/// # Errors
///
/// Returns an [`AlertArgsError`] if there are not exactly two arguments,
/// either is not a finite decimal, or `high <= low`.
pub fn parse_alert_args(args: &[String]) -> Result<AlertThreshold, AlertArgsError> {
    let [high, low] = args else {
        return Err(AlertArgsError::WrongCount(args.len()));
    };
    let high = parse_price(high)?;
    let low = parse_price(low)?;
    Ok(AlertThreshold::try_new(high, low)?)
}

fn parse_price(raw: &str) -> Result<Decimal, AlertArgsError> {
    let trimmed = raw.strip_prefix('$').unwrap_or(raw);
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| AlertArgsError::NotANumber(raw.to_string()))
}

/// Dispatches user commands. Cheap to clone; state is shared.
#[derive(Clone)]
pub struct CommandRouter {
    store: Arc<SubscriptionStore>,
    fetcher: Arc<PriceFetcher>,
    update_interval: Duration,
}

impl CommandRouter {
    #[must_use]
    pub fn new(
        store: Arc<SubscriptionStore>,
        fetcher: Arc<PriceFetcher>,
        update_interval: Duration,
    ) -> Self {
        Self {
            store,
            fetcher,
            update_interval,
        }
    }

    /// Handle a raw chat message.
    ///
    /// Returns `None` for text that is not a command; unknown commands get
    /// the help text.
    pub async fn respond(&self, user: UserId, text: &str) -> Option<String> {
        match parse_command(text) {
            Ok(command) => Some(self.execute(user, command).await),
            Err(CommandParseError::NotACommand) => None,
            Err(CommandParseError::UnknownCommand(cmd)) => {
                debug!(user = %user, command = %cmd, "Unknown command");
                Some(format::unknown_command_text(&cmd, self.update_interval))
            }
        }
    }

    /// Execute one parsed command and return response text.
    pub async fn execute(&self, user: UserId, command: Command) -> String {
        match command {
            Command::Start | Command::Help => format::help_text(self.update_interval),
            Command::Price => self.price_text().await,
            Command::Alert { args } => self.alert_text(user, &args),
            Command::Monitor => self.monitor_text(user),
            Command::Stop => self.stop_text(user),
            Command::Status => format::status_text(&self.store.user_settings(user)),
        }
    }

    async fn price_text(&self) -> String {
        match self.fetcher.fetch_price().await {
            Ok(quote) => format::price_text(&quote, Local::now().naive_local()),
            Err(_) => format::PRICE_UNAVAILABLE.to_string(),
        }
    }

    fn alert_text(&self, user: UserId, args: &[String]) -> String {
        match parse_alert_args(args) {
            Ok(threshold) => {
                self.store.set_threshold(user, threshold);
                info!(
                    user = %user,
                    high = %threshold.high(),
                    low = %threshold.low(),
                    "Alert thresholds set"
                );
                format::alert_set_text(&threshold)
            }
            Err(AlertArgsError::WrongCount(_)) => format::ALERT_USAGE.to_string(),
            Err(AlertArgsError::NotANumber(value)) => format::alert_not_numeric_text(&value),
            Err(AlertArgsError::Domain(_)) => format::ALERT_ORDER.to_string(),
        }
    }

    fn monitor_text(&self, user: UserId) -> String {
        let newly_added = self.store.subscribe(user);
        if newly_added {
            info!(
                user = %user,
                subscribers = self.store.subscriber_count(),
                "User subscribed"
            );
        }
        format::monitor_started_text(self.update_interval, newly_added)
    }

    fn stop_text(&self, user: UserId) -> String {
        if self.store.unsubscribe(user) {
            info!(
                user = %user,
                subscribers = self.store.subscriber_count(),
                "User unsubscribed"
            );
            format::MONITOR_STOPPED.to_string()
        } else {
            format::NOT_MONITORING.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::port::outbound::price::tests::StaticSource;
    use crate::port::outbound::price::PriceSource;
    use rust_decimal_macros::dec;

    const USER: UserId = UserId::new(42);

    fn router_with(sources: Vec<Arc<dyn PriceSource>>) -> (CommandRouter, Arc<SubscriptionStore>) {
        let store = Arc::new(SubscriptionStore::new());
        let router = CommandRouter::new(
            Arc::clone(&store),
            Arc::new(PriceFetcher::new(sources)),
            Duration::from_secs(1800),
        );
        (router, store)
    }

    fn router() -> (CommandRouter, Arc<SubscriptionStore>) {
        router_with(vec![Arc::new(StaticSource::ok("a", dec!(31.5))) as Arc<dyn PriceSource>])
    }

    fn args(values: &[&str]) -> Command {
        Command::Alert {
            args: values.iter().map(|v| v.to_string()).collect(),
        }
    }

    // -------------------------------------------------------------------------
    // Alert argument validation
    // -------------------------------------------------------------------------

    #[test]
    fn parse_alert_args_accepts_decimals() {
        let t = parse_alert_args(&["32.5".into(), "28".into()]).unwrap();
        assert_eq!(t.high(), dec!(32.5));
        assert_eq!(t.low(), dec!(28));
    }

    #[test]
    fn parse_alert_args_accepts_dollar_prefix_and_scientific() {
        let t = parse_alert_args(&["$32".into(), "2.8e1".into()]).unwrap();
        assert_eq!(t.high(), dec!(32));
        assert_eq!(t.low(), dec!(28));
    }

    #[test]
    fn parse_alert_args_wrong_count() {
        assert_eq!(
            parse_alert_args(&[]),
            Err(AlertArgsError::WrongCount(0))
        );
        assert_eq!(
            parse_alert_args(&["32".into()]),
            Err(AlertArgsError::WrongCount(1))
        );
        assert_eq!(
            parse_alert_args(&["32".into(), "28".into(), "1".into()]),
            Err(AlertArgsError::WrongCount(3))
        );
    }

    #[test]
    fn parse_alert_args_rejects_non_numbers() {
        for bad in ["abc", "NaN", "inf", "12.34.56", ""] {
            assert_eq!(
                parse_alert_args(&[bad.into(), "28".into()]),
                Err(AlertArgsError::NotANumber(bad.into())),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn parse_alert_args_rejects_inverted_bounds() {
        assert!(matches!(
            parse_alert_args(&["28".into(), "32".into()]),
            Err(AlertArgsError::Domain(DomainError::ThresholdOrder { .. }))
        ));
        assert!(matches!(
            parse_alert_args(&["30".into(), "30".into()]),
            Err(AlertArgsError::Domain(_))
        ));
    }

    // -------------------------------------------------------------------------
    // /alert
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn alert_stores_threshold_and_overwrites() {
        let (router, store) = router();

        let reply = router.execute(USER, args(&["32", "28"])).await;
        assert!(reply.starts_with("✅ Alerts set!"));

        router.execute(USER, args(&["40", "20"])).await;
        let stored = store.threshold(USER).unwrap();
        assert_eq!((stored.high(), stored.low()), (dec!(40), dec!(20)));
    }

    #[tokio::test]
    async fn alert_with_inverted_bounds_keeps_prior_value() {
        let (router, store) = router();
        router.execute(USER, args(&["32", "28"])).await;

        let reply = router.execute(USER, args(&["28", "32"])).await;

        assert_eq!(reply, format::ALERT_ORDER);
        let stored = store.threshold(USER).unwrap();
        assert_eq!((stored.high(), stored.low()), (dec!(32), dec!(28)));
    }

    #[tokio::test]
    async fn alert_with_bad_arguments_does_not_mutate() {
        let (router, store) = router();

        assert_eq!(router.execute(USER, args(&["32"])).await, format::ALERT_USAGE);
        assert_eq!(
            router.execute(USER, args(&["32", "28", "1"])).await,
            format::ALERT_USAGE
        );
        let reply = router.execute(USER, args(&["high", "28"])).await;
        assert!(reply.contains("valid numbers"));
        assert!(reply.contains("Usage: /alert"));

        assert_eq!(store.threshold(USER), None);
    }

    // -------------------------------------------------------------------------
    // /monitor, /stop, /status
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn monitor_is_idempotent() {
        let (router, store) = router();

        router.execute(USER, Command::Monitor).await;
        let second = router.execute(USER, Command::Monitor).await;

        assert!(second.contains("every 30 minutes"));
        assert_eq!(store.subscribers(), vec![USER]);
    }

    #[tokio::test]
    async fn stop_without_subscription() {
        let (router, store) = router();
        assert_eq!(router.execute(USER, Command::Stop).await, format::NOT_MONITORING);
        assert!(!store.is_subscribed(USER));
    }

    #[tokio::test]
    async fn stop_removes_subscription() {
        let (router, store) = router();
        router.execute(USER, Command::Monitor).await;

        assert_eq!(router.execute(USER, Command::Stop).await, format::MONITOR_STOPPED);
        assert!(!store.is_subscribed(USER));
    }

    #[tokio::test]
    async fn status_reflects_store() {
        let (router, _store) = router();

        let empty = router.execute(USER, Command::Status).await;
        assert!(empty.contains("No alerts set"));
        assert!(empty.contains("Inactive"));

        router.execute(USER, args(&["32", "28"])).await;
        router.execute(USER, Command::Monitor).await;

        let full = router.execute(USER, Command::Status).await;
        assert!(full.contains("Alert High: $32"));
        assert!(full.contains("Alert Low: $28"));
        assert!(full.contains("✅ Active"));
    }

    #[tokio::test]
    async fn status_is_per_user() {
        let (router, _store) = router();
        router.execute(USER, Command::Monitor).await;

        let other = router.execute(UserId::new(7), Command::Status).await;
        assert!(other.contains("Inactive"));
    }

    #[tokio::test]
    async fn group_chat_members_share_one_identity() {
        let (router, store) = router();
        let group = UserId::new(-100_123_456);

        router.respond(group, "/alert 32 28").await.unwrap();
        router.respond(group, "/monitor@silver_bot").await.unwrap();
        let status = router.respond(group, "/status").await.unwrap();

        assert!(status.contains("✅ Active"));
        assert!(status.contains("$32"));
        assert_eq!(store.subscriber_count(), 1);
    }

    // -------------------------------------------------------------------------
    // /price, /help, raw text
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn price_reports_quote() {
        let (router, _store) = router();
        let reply = router.execute(USER, Command::Price).await;
        assert!(reply.contains("$31.50 per troy ounce"));
    }

    #[tokio::test]
    async fn price_reports_unavailable_when_all_fail() {
        let (router, _store) = router_with(vec![Arc::new(StaticSource::failing("a")) as Arc<dyn PriceSource>]);
        assert_eq!(
            router.execute(USER, Command::Price).await,
            format::PRICE_UNAVAILABLE
        );
    }

    #[tokio::test]
    async fn start_and_help_have_no_side_effects() {
        let (router, store) = router();
        let start = router.execute(USER, Command::Start).await;
        let help = router.execute(USER, Command::Help).await;

        assert_eq!(start, help);
        assert!(help.contains("/alert <high> <low>"));
        assert_eq!(store.user_settings(USER).threshold, None);
        assert!(!store.user_settings(USER).subscribed);
    }

    #[tokio::test]
    async fn respond_ignores_plain_text() {
        let (router, _store) = router();
        assert_eq!(router.respond(USER, "what's the price?").await, None);
    }

    #[tokio::test]
    async fn respond_answers_unknown_command_with_help() {
        let (router, _store) = router();
        let reply = router.respond(USER, "/gold").await.unwrap();
        assert!(reply.starts_with("Unknown command `/gold`"));
        assert!(reply.contains("/price"));
    }

    #[tokio::test]
    async fn respond_routes_commands() {
        let (router, store) = router();
        let reply = router.respond(USER, "/alert@silver_bot 32 28").await.unwrap();
        assert!(reply.starts_with("✅ Alerts set!"));
        assert!(store.threshold(USER).is_some());
    }
}
