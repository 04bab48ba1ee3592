//! Composite reads spanning several tables.

use super::{
    day_queries::SELECT_DAYS_BY_PLAN_SQL, plan_queries::SELECT_PLAN_SQL, query_all, query_one,
    stop_queries::SELECT_STOPS_BY_DAY_SQL,
};
use crate::{
    error::{DatabaseResultExt, Result},
    models::{DayWithStops, RoutePoint, TravelPlanDetails},
};

impl super::Database {
    /// Loads a plan with its days (ascending) and each day's stops
    /// (ascending). Returns `None` when the plan does not exist.
    ///
    /// All reads run inside one transaction, so the aggregate reflects a
    /// single snapshot of the store.
    pub fn get_travel_plan_with_details(&self, plan_id: u64) -> Result<Option<TravelPlanDetails>> {
        let tx = self
            .connection
            .unchecked_transaction()
            .db_context("Failed to begin read transaction")?;

        let Some(plan) = query_one(
            &tx,
            SELECT_PLAN_SQL,
            [plan_id as i64],
            Self::build_plan_from_row,
        )?
        else {
            return Ok(None);
        };

        let days = query_all(
            &tx,
            SELECT_DAYS_BY_PLAN_SQL,
            [plan_id as i64],
            Self::build_day_from_row,
        )?;

        let mut days_with_stops = Vec::with_capacity(days.len());
        for day in days {
            let stops = query_all(
                &tx,
                SELECT_STOPS_BY_DAY_SQL,
                [day.day_id as i64],
                Self::build_stop_from_row,
            )?;
            days_with_stops.push(DayWithStops { day, stops });
        }

        tx.commit().db_context("Failed to end read transaction")?;

        Ok(Some(TravelPlanDetails {
            plan,
            days: days_with_stops,
        }))
    }

    /// Returns the drawable route of a day: its stops in order, without the
    /// ones whose coordinates are unknown.
    pub fn get_route_for_day(&self, day_id: u64) -> Result<Vec<RoutePoint>> {
        let stops = self.get_stops_for_day(day_id)?;
        Ok(stops.iter().filter_map(RoutePoint::from_stop).collect())
    }
}
