//! Periodic price notifier.
//!
//! On every tick: fetch one quote, send each subscriber a routine update,
//! then at most one threshold alert. A failed fetch skips the tick; a failed
//! delivery only affects that user.

use std::sync::Arc;
use std::time::Duration;

use rust_decimal::Decimal;
use tokio::sync::watch;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, error, info, warn};

use super::fetcher::PriceFetcher;
use super::format;
use super::store::SubscriptionStore;
use crate::port::outbound::messenger::Messenger;

/// Default delay between startup and the first tick.
pub const DEFAULT_FIRST_DELAY: Duration = Duration::from_secs(10);

/// Default tick period.
pub const DEFAULT_PERIOD: Duration = Duration::from_secs(1800);

/// When the notifier fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schedule {
    pub first_delay: Duration,
    pub period: Duration,
}

impl Default for Schedule {
    fn default() -> Self {
        Self {
            first_delay: DEFAULT_FIRST_DELAY,
            period: DEFAULT_PERIOD,
        }
    }
}

/// Outcome of one tick.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Price fanned out, `None` when the fetch failed.
    pub price: Option<Decimal>,
    pub updates_sent: usize,
    pub alerts_sent: usize,
    pub delivery_failures: usize,
}

pub struct PeriodicNotifier {
    store: Arc<SubscriptionStore>,
    fetcher: Arc<PriceFetcher>,
    messenger: Arc<dyn Messenger>,
    schedule: Schedule,
}

impl PeriodicNotifier {
    #[must_use]
    pub fn new(
        store: Arc<SubscriptionStore>,
        fetcher: Arc<PriceFetcher>,
        messenger: Arc<dyn Messenger>,
        schedule: Schedule,
    ) -> Self {
        Self {
            store,
            fetcher,
            messenger,
            schedule,
        }
    }

    /// Run one notification round.
    pub async fn tick(&self) -> TickReport {
        let Ok(quote) = self.fetcher.fetch_price().await else {
            warn!("Skipping periodic update: no price available");
            return TickReport::default();
        };
        let price = quote.price();

        // Snapshot: subscriptions changed during delivery apply next tick.
        let subscribers = self.store.subscribers();
        let mut report = TickReport {
            price: Some(price),
            ..TickReport::default()
        };

        for user in subscribers {
            if let Err(e) = self.messenger.send(user, &format::update_text(price)).await {
                error!(user = %user, error = %e, "Failed to send price update");
                report.delivery_failures += 1;
                continue;
            }
            report.updates_sent += 1;

            let Some(breach) = self.store.threshold(user).and_then(|t| t.check(price)) else {
                continue;
            };
            match self
                .messenger
                .send(user, &format::breach_text(price, breach))
                .await
            {
                Ok(()) => {
                    info!(user = %user, price = %price, ?breach, "Price alert sent");
                    report.alerts_sent += 1;
                }
                Err(e) => {
                    error!(user = %user, error = %e, "Failed to send price alert");
                    report.delivery_failures += 1;
                }
            }
        }

        info!(
            price = %price,
            source = quote.source(),
            updates = report.updates_sent,
            alerts = report.alerts_sent,
            failures = report.delivery_failures,
            "Periodic update complete"
        );
        report
    }

    /// Tick on schedule until `shutdown` turns true or its sender is dropped.
    ///
    /// A tick in progress always runs to completion before shutdown is
    /// observed.
    pub async fn run(self, mut shutdown: watch::Receiver<bool>) {
        let mut timer = interval_at(
            Instant::now() + self.schedule.first_delay,
            self.schedule.period,
        );
        timer.set_missed_tick_behavior(MissedTickBehavior::Skip);

        info!(
            first_delay_secs = self.schedule.first_delay.as_secs(),
            period_secs = self.schedule.period.as_secs(),
            "Periodic notifier started"
        );

        loop {
            tokio::select! {
                result = shutdown.changed() => {
                    match result {
                        Ok(()) => {
                            if *shutdown.borrow() {
                                info!("Shutdown signal received");
                                break;
                            }
                        }
                        Err(_) => {
                            info!("Shutdown channel closed");
                            break;
                        }
                    }
                }
                _ = timer.tick() => {
                    debug!("Periodic notifier tick");
                    self.tick().await;
                }
            }
        }

        info!("Periodic notifier stopped");
    }
}
