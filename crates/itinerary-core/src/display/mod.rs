//! Markdown rendering of itinerary entities.
//!
//! Every model implements [`std::fmt::Display`] so that a host can print a
//! plan, a day or a stop without knowing its layout:
//!
//! ```text
//! # Eurotrip
//!
//! - Destination: Paris
//! - Dates: 2025-07-15 to 2025-07-30
//!
//! ## Day 1
//! 1. Louvre (09:30-11:00)
//! 2. Tower
//! ```
//!
//! - [`models`]: Display implementations for the domain models
//! - [`datetime`]: Review timestamps rendered in the system time zone

pub mod datetime;
pub mod models;

pub use datetime::LocalDateTime;
