//! Core library for the travel itinerary planner.
//!
//! This crate is the persistent itinerary store: travel plans are broken into
//! days, days hold ordered geo-located stops, and stops collect reviews. All
//! of it lives in one local SQLite file, `travel_planner.db`.
//!
//! # Layers
//!
//! - [`db`]: the synchronous store. One [`Database`] handle owns the SQLite
//!   connection; entity queries, stop ordering and composite reads are
//!   methods on it.
//! - [`planner`]: [`TravelPlanner`], an async wrapper that shares the one
//!   handle with UI tasks running on a tokio runtime.
//! - [`models`] and [`params`]: rows as they come out of the store, and the
//!   validated inputs that go into it.
//! - [`error`]: [`ItineraryError`] and its [`ErrorKind`] taxonomy.
//! - [`display`]: markdown rendering of the models.
//!
//! # Quick Start
//!
//! ```rust
//! use itinerary_core::{
//!     params::{CreateStop, PlanFields, StopFields},
//!     Database,
//! };
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut db = Database::open_in_memory()?;
//!
//! let plan_id = db.add_travel_plan(&PlanFields {
//!     plan_name: "Eurotrip".to_string(),
//!     destination: "Paris".to_string(),
//!     start_date: "2025-07-15".parse()?,
//!     end_date: "2025-07-30".parse()?,
//! })?;
//! let day_id = db.add_day(plan_id, 1)?;
//!
//! for name in ["Louvre", "Tower", "Arc"] {
//!     db.add_stop(&CreateStop {
//!         day_id,
//!         stop: StopFields {
//!             location_name: name.to_string(),
//!             ..Default::default()
//!         },
//!         order_index: None,
//!     })?;
//! }
//!
//! let details = db.get_travel_plan_with_details(plan_id)?.expect("plan exists");
//! assert_eq!(details.days[0].stops.len(), 3);
//! println!("{details}");
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod planner;

// Re-export commonly used types
pub use db::{Database, RunResult};
pub use error::{ErrorKind, ItineraryError, Result};
pub use models::{
    Coordinates, Day, DayWithStops, MediaUrls, Review, RoutePoint, Stop, TravelPlan,
    TravelPlanDetails,
};
pub use params::{CreateStop, PlanFields, ReviewFields, StopFields};
pub use planner::{TravelPlanner, TravelPlannerBuilder};
