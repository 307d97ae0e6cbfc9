//! Silverwatch - silver spot price relay for Telegram.
//!
//! This crate polls public commodity-price feeds for the silver spot price
//! and relays it to chat users on request, with periodic push updates and
//! per-user threshold alerts.
//!
//! # Architecture
//!
//! The crate follows a hexagonal layout:
//!
//! - **`domain`** - Pure types: [`domain::PriceQuote`], [`domain::AlertThreshold`]
//! - **`port`** - Traits at the I/O seams: price sources and messengers
//! - **`adapter`** - HTTP price providers and the Telegram bot
//! - **`application`** - Subscription store, price fetcher, command router,
//!   and the periodic notifier
//! - **`infrastructure`** - Environment configuration, logging, and runtime wiring
//!
//! # Example
//!
//! ```
//! use silverwatch::domain::{AlertThreshold, Breach};
//! use rust_decimal_macros::dec;
//!
//! let threshold = AlertThreshold::try_new(dec!(32), dec!(28)).unwrap();
//! assert_eq!(threshold.check(dec!(33.00)), Some(Breach::Above(dec!(32))));
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;
