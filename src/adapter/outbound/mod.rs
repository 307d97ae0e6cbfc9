//! Outbound adapters (driven side).

pub mod price;
pub mod telegram;
