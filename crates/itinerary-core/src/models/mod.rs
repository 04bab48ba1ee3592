//! Data models for travel plans, days, stops and reviews.
//!
//! The models mirror the four tables of the store one-to-one and carry the
//! store-assigned keys under the same names as their columns (`plan_id`,
//! `day_id`, `stop_id`, `review_id`), so serialized rows look exactly like the
//! records the UI has always consumed.
//!
//! Display implementations live in [`crate::display`].
//!
//! # Examples
//!
//! ```rust
//! use itinerary_core::models::{MediaUrls, Stop};
//!
//! let stop = Stop {
//!     stop_id: 10,
//!     day_id: 1,
//!     location_name: "Louvre".to_string(),
//!     address: None,
//!     latitude: Some(48.8606),
//!     longitude: Some(2.3376),
//!     arrival_time: Some("09:30".to_string()),
//!     departure_time: None,
//!     notes: None,
//!     order_index: 0,
//!     media_urls: MediaUrls::default(),
//! };
//! assert!(stop.coordinates().is_some());
//! ```

pub mod day;
pub mod details;
pub mod media;
pub mod plan;
pub mod review;
pub mod stop;

#[cfg(test)]
mod tests;

pub use day::Day;
pub use details::{DayWithStops, RoutePoint, TravelPlanDetails};
pub use media::MediaUrls;
pub use plan::TravelPlan;
pub use review::Review;
pub use stop::{Coordinates, Stop};
