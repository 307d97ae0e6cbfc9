//! Long-polling command listener.
//!
//! Registers the "/" command menu, then answers every text message through
//! the [`CommandRouter`].

use teloxide::prelude::*;
use teloxide::types::BotCommand;
use tracing::{error, info, warn};

use crate::application::command::command_menu;
use crate::application::router::CommandRouter;
use crate::domain::UserId;

/// Run the listener until the bot's dispatcher stops (Ctrl-C).
pub async fn run_listener(bot: Bot, router: CommandRouter) {
    // Register commands with Telegram so they appear in the "/" menu
    if let Err(e) = register_bot_commands(&bot).await {
        warn!(error = %e, "Failed to register bot commands with Telegram");
    }

    info!("Telegram command listener started");

    teloxide::repl(bot, move |bot: Bot, msg: Message| {
        let router = router.clone();
        async move {
            let Some(text) = msg.text() else {
                return respond(());
            };

            // Keyed by chat: group members share one identity.
            let user = UserId::new(msg.chat.id.0);
            if let Some(response) = router.respond(user, text).await {
                if let Err(e) = bot.send_message(msg.chat.id, response).await {
                    error!(user = %user, error = %e, "Failed to send Telegram command response");
                }
            }

            respond(())
        }
    })
    .await;

    warn!("Telegram command listener shutting down");
}

/// Bot commands for Telegram menu registration.
#[must_use]
pub fn bot_commands() -> Vec<BotCommand> {
    command_menu()
        .into_iter()
        .map(|(cmd, desc)| BotCommand::new(cmd, desc))
        .collect()
}

async fn register_bot_commands(bot: &Bot) -> Result<(), teloxide::RequestError> {
    bot.set_my_commands(bot_commands()).await?;
    info!("Registered bot commands with Telegram");
    Ok(())
}
