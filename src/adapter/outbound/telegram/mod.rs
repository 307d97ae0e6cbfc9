//! Telegram delivery.

mod messenger;

pub use messenger::TelegramMessenger;
