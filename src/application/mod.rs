//! Application services (use cases).
//!
//! These services combine domain types with the outbound ports to implement
//! the bot's behavior: answering commands and pushing periodic updates.

pub mod command;
pub mod fetcher;
pub mod format;
pub mod notifier;
pub mod router;
pub mod store;
