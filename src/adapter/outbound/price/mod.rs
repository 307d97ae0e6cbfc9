//! HTTP price providers.
//!
//! Each upstream is described by a static [`ProviderDescriptor`] (URL, auth
//! scheme, payload parser). [`HttpPriceSource`] turns one descriptor into a
//! [`PriceSource`](crate::port::outbound::price::PriceSource).

mod goldapi;
mod http;
mod metals_api;
mod metals_live;
mod provider;
mod settings;

pub use http::{build_sources, HttpPriceSource};
pub use provider::{descriptor, Auth, ProviderDescriptor, ProviderKind};
pub use settings::PriceProviderSettings;
