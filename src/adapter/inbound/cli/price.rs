//! Handler for the `price` command.

use chrono::Local;

use crate::application::format;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::infrastructure::runtime;

/// Fetch once and print the same text `/price` would reply with.
pub async fn execute(config: &Config) -> Result<()> {
    match runtime::fetch_once(config).await {
        Ok(quote) => {
            println!(
                "{}",
                format::price_text(&quote, Local::now().naive_local())
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("{}", format::PRICE_UNAVAILABLE);
            Err(e)
        }
    }
}
