//! Asynchronous boundary over the synchronous itinerary store.
//!
//! The store itself is synchronous: [`Database`] runs every statement on the
//! calling thread. A UI that lives on an async runtime goes through
//! [`TravelPlanner`] instead, which owns the one process-wide handle and runs
//! each call on the blocking pool. Calls are serialised on the handle, so
//! statements execute in the order they were issued and a read issued after
//! a write observes it.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │     UI task     │    │  TravelPlanner  │    │    Database     │
//! │   (async fn)    │───▶│ (spawn_blocking │───▶│ (one rusqlite   │
//! │                 │    │  + handle lock) │    │   connection)   │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use itinerary_core::{params::PlanFields, TravelPlannerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = TravelPlannerBuilder::new()
//!     .with_database_path("/tmp/itinerary-example/travel_planner.db")
//!     .build()
//!     .await?;
//!
//! let plan_id = planner
//!     .add_travel_plan(PlanFields {
//!         plan_name: "Eurotrip".to_string(),
//!         destination: "Paris".to_string(),
//!         start_date: "2025-07-15".parse()?,
//!         end_date: "2025-07-30".parse()?,
//!     })
//!     .await?;
//! let day = planner.add_next_day(plan_id).await?;
//! assert_eq!(day.day_number, 1);
//! # Ok(())
//! # }
//! ```

use std::sync::{Arc, Mutex};

use tokio::task;

use crate::{
    db::Database,
    error::{ItineraryError, Result},
};

pub mod builder;
pub mod day_ops;
pub mod plan_ops;
pub mod review_ops;
pub mod stop_ops;


pub use builder::TravelPlannerBuilder;

/// Main planner interface for managing travel plans and their contents.
#[derive(Clone)]
pub struct TravelPlanner {
    db: Arc<Mutex<Database>>,
}

impl TravelPlanner {
    /// Wraps an open database handle.
    pub(crate) fn new(db: Database) -> Self {
        Self {
            db: Arc::new(Mutex::new(db)),
        }
    }

    /// Runs `op` against the shared handle on the blocking pool.
    pub(crate) async fn with_db<T, F>(&self, op: F) -> Result<T>
    where
        F: FnOnce(&mut Database) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || {
            let mut guard = db.lock().map_err(|_| ItineraryError::Configuration {
                message: "Database handle lock poisoned".to_string(),
            })?;
            op(&mut *guard)
        })
        .await
        .map_err(|e| ItineraryError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
