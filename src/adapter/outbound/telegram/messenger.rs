//! [`Messenger`] backed by the Telegram Bot API.

use async_trait::async_trait;
use teloxide::prelude::*;

use crate::domain::UserId;
use crate::error::DeliveryError;
use crate::port::outbound::messenger::Messenger;

/// Sends plain-text messages through a teloxide [`Bot`].
#[derive(Clone)]
pub struct TelegramMessenger {
    bot: Bot,
}

impl TelegramMessenger {
    #[must_use]
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }
}

/// Chat a user is reached at.
pub(crate) fn chat_id(user: UserId) -> ChatId {
    ChatId(user.get())
}

#[async_trait]
impl Messenger for TelegramMessenger {
    async fn send(&self, user: UserId, text: &str) -> Result<(), DeliveryError> {
        self.bot
            .send_message(chat_id(user), text)
            .await
            .map(|_| ())
            .map_err(|e| DeliveryError {
                user,
                reason: e.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_id_matches_user_id() {
        assert_eq!(chat_id(UserId::new(123_456)), ChatId(123_456));
    }
}
