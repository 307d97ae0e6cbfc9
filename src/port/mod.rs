//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports are the seams where the application touches the outside world.
//! Adapters implement them; tests substitute in-memory doubles.
//!
//! # Architecture
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │      Application        │
//!     ┌──────────────┤  Domain + Port          ├──────────────┐
//!     │              └─────────────────────────┘              │
//!     ▼                                                       ▼
//! ┌─────────────┐                                      ┌───────────┐
//! │ PriceSource │                                      │ Messenger │
//! │  (HTTP)     │                                      │ (Telegram)│
//! └─────────────┘                                      └───────────┘
//! ```

pub mod outbound;
