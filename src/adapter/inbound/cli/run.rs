//! Handler for the `run` command.

use crate::error::{Error, Result};
use crate::infrastructure::config::settings::Config;
use crate::infrastructure::runtime;

/// Shown on stderr when `run` starts without a usable token.
pub const MISSING_TOKEN_WARNING: &str = "⚠️  Please set your TELEGRAM_BOT_TOKEN!\n\
    Get a token from @BotFather on Telegram and put it in the environment or a .env file.";

/// Execute the run command.
///
/// A missing token is reported on stderr before any task starts.
pub async fn execute(config: Config) -> Result<()> {
    if let Err(e) = config.require_bot_token() {
        eprintln!("{MISSING_TOKEN_WARNING}");
        return Err(Error::Config(e));
    }
    runtime::run(config).await
}
