//! User-facing message text.
//!
//! Messages are plain text with emoji; no parse mode is required to send
//! them.

use std::time::Duration;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use super::store::UserSettings;
use crate::domain::{AlertThreshold, Breach, PriceQuote};

/// Help text returned by `/start` and `/help`.
#[must_use]
pub fn help_text(update_interval: Duration) -> String {
    format!(
        "🪙 Silver Price Monitor Bot\n\n\
        Available commands:\n\
        /price - Get current silver spot price\n\
        /alert <high> <low> - Set price alerts (e.g., /alert 32 28)\n\
        /monitor - Start periodic price updates (every {})\n\
        /stop - Stop periodic updates\n\
        /status - Check your alert settings\n\
        /help - Show this message",
        format_interval(update_interval)
    )
}

#[must_use]
pub fn price_text(quote: &PriceQuote, local_time: NaiveDateTime) -> String {
    format!(
        "💰 Silver Spot Price\n\n\
        Price: ${:.2} per {}\n\
        Time: {}",
        quote.price(),
        quote.unit(),
        local_time.format("%Y-%m-%d %H:%M:%S")
    )
}

pub const PRICE_UNAVAILABLE: &str = "⚠️ Unable to fetch price data. Please try again later.";

pub const ALERT_USAGE: &str = "Usage: /alert <high_price> <low_price>\nExample: /alert 32 28";

#[must_use]
pub fn alert_not_numeric_text(value: &str) -> String {
    format!("⚠️ Please provide valid numbers! `{value}` is not a number.\n\n{ALERT_USAGE}")
}

pub const ALERT_ORDER: &str = "⚠️ High price must be greater than low price!";

#[must_use]
pub fn alert_set_text(threshold: &AlertThreshold) -> String {
    format!(
        "✅ Alerts set!\n\
        High: ${}\n\
        Low: ${}\n\n\
        Use /monitor to start checking prices.",
        threshold.high(),
        threshold.low()
    )
}

#[must_use]
pub fn monitor_started_text(update_interval: Duration, newly_added: bool) -> String {
    let lead = if newly_added {
        "✅ Monitoring started!"
    } else {
        "✅ Monitoring already active."
    };
    format!(
        "{lead} You'll receive updates every {}.\n\
        Use /stop to stop monitoring.",
        format_interval(update_interval)
    )
}

pub const MONITOR_STOPPED: &str = "🛑 Monitoring stopped.";

pub const NOT_MONITORING: &str = "You're not currently monitoring prices.";

#[must_use]
pub fn status_text(settings: &UserSettings) -> String {
    let mut text = String::from("📊 Your Settings\n\n");

    match settings.threshold {
        Some(threshold) => {
            text.push_str(&format!("Alert High: ${}\n", threshold.high()));
            text.push_str(&format!("Alert Low: ${}\n", threshold.low()));
        }
        None => text.push_str("No alerts set\n"),
    }

    if settings.subscribed {
        text.push_str("\nMonitoring: ✅ Active");
    } else {
        text.push_str("\nMonitoring: ⭕ Inactive");
    }
    text
}

/// Routine periodic update.
#[must_use]
pub fn update_text(price: Decimal) -> String {
    format!("📊 Silver: ${price:.2}/oz")
}

/// Threshold alert.
#[must_use]
pub fn breach_text(price: Decimal, breach: Breach) -> String {
    match breach {
        Breach::Above(high) => {
            format!("🚨 ALERT! Silver price hit ${price:.2} (above ${high})")
        }
        Breach::Below(low) => {
            format!("🚨 ALERT! Silver price hit ${price:.2} (below ${low})")
        }
    }
}

#[must_use]
pub fn unknown_command_text(command: &str, update_interval: Duration) -> String {
    format!(
        "Unknown command `{command}`\n\n{}",
        help_text(update_interval)
    )
}

/// Render an interval in the largest whole unit ("30 minutes", "1 hour").
#[must_use]
pub fn format_interval(interval: Duration) -> String {
    let secs = interval.as_secs();
    let (value, unit) = if secs >= 3600 && secs % 3600 == 0 {
        (secs / 3600, "hour")
    } else if secs >= 60 && secs % 60 == 0 {
        (secs / 60, "minute")
    } else {
        (secs, "second")
    };
    let plural = if value == 1 { "" } else { "s" };
    format!("{value} {unit}{plural}")
}
