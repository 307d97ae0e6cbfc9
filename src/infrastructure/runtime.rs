//! Runtime wiring.
//!
//! Builds the provider chain, the store, and the two long-running tasks
//! (command listener and periodic notifier), then waits for shutdown.

use std::sync::Arc;

use reqwest::Client;
use teloxide::Bot;
use tokio::signal;
use tokio::sync::watch;
use tracing::{error, info, warn};

use crate::adapter::inbound::telegram::run_listener;
use crate::adapter::outbound::price::build_sources;
use crate::adapter::outbound::telegram::TelegramMessenger;
use crate::application::fetcher::PriceFetcher;
use crate::application::notifier::PeriodicNotifier;
use crate::application::router::CommandRouter;
use crate::application::store::SubscriptionStore;
use crate::domain::PriceQuote;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::port::outbound::messenger::Messenger;

/// Build the fetcher for the configured provider chain.
///
/// An empty chain is allowed; every fetch then reports the price as
/// unavailable.
pub fn build_fetcher(config: &Config) -> Result<PriceFetcher> {
    let client = Client::builder().build()?;
    let sources = build_sources(&client, &config.providers);
    if sources.is_empty() {
        warn!("No usable price providers configured");
    }
    Ok(PriceFetcher::new(sources))
}

/// Fetch a single quote through the configured chain.
pub async fn fetch_once(config: &Config) -> Result<PriceQuote> {
    let fetcher = build_fetcher(config)?;
    Ok(fetcher.fetch_price().await?)
}

/// Run the bot until Ctrl-C or until the listener exits.
///
/// The notifier is signalled over a watch channel and awaited, so a tick in
/// progress completes before this returns.
pub async fn run(config: Config) -> Result<()> {
    let token = config.require_bot_token()?.to_string();

    let store = Arc::new(SubscriptionStore::new());
    let fetcher = Arc::new(build_fetcher(&config)?);
    let bot = Bot::new(token);

    let router = CommandRouter::new(
        Arc::clone(&store),
        Arc::clone(&fetcher),
        config.schedule.period,
    );
    let messenger: Arc<dyn Messenger> = Arc::new(TelegramMessenger::new(bot.clone()));
    let notifier = PeriodicNotifier::new(
        Arc::clone(&store),
        Arc::clone(&fetcher),
        messenger,
        config.schedule,
    );

    info!(
        providers = fetcher.len(),
        period_secs = config.schedule.period.as_secs(),
        "silverwatch starting"
    );

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let notifier_handle = tokio::spawn(notifier.run(shutdown_rx));
    let mut listener_handle = tokio::spawn(run_listener(bot, router));

    tokio::select! {
        result = &mut listener_handle => {
            if let Err(e) = result {
                error!(error = %e, "Command listener task failed");
            }
        }
        _ = signal::ctrl_c() => {
            info!("Shutdown signal received (Ctrl+C)");
        }
    }

    let _ = shutdown_tx.send(true);
    if let Err(e) = notifier_handle.await {
        error!(error = %e, "Periodic notifier task failed");
    }
    if !listener_handle.is_finished() {
        listener_handle.abort();
    }

    info!(subscribers = store.subscriber_count(), "silverwatch stopped");
    Ok(())
}
