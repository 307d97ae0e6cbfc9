//! Messenger port for pushing text to chat users.

use async_trait::async_trait;

use crate::domain::UserId;
use crate::error::DeliveryError;

/// Sends plain-text messages to a user's private chat.
///
/// Implementations must be thread-safe (`Send + Sync`); the periodic notifier
/// awaits each send in turn.
#[async_trait]
pub trait Messenger: Send + Sync {
    /// Deliver one message.
    async fn send(&self, user: UserId, text: &str) -> Result<(), DeliveryError>;
}
