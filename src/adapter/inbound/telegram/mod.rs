//! Telegram command intake.

mod listener;

pub use listener::{bot_commands, run_listener};
