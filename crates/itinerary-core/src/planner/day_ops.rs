//! Day operations for the TravelPlanner.

use super::TravelPlanner;
use crate::{error::Result, models::Day};

impl TravelPlanner {
    /// Adds a day with an explicit number to a plan.
    pub async fn add_day(&self, plan_id: u64, day_number: u32) -> Result<u64> {
        self.with_db(move |db| db.add_day(plan_id, day_number)).await
    }

    /// Adds a day numbered after the plan's last day.
    pub async fn add_next_day(&self, plan_id: u64) -> Result<Day> {
        self.with_db(move |db| db.add_next_day(plan_id)).await
    }

    /// Lists the days of a plan by ascending day number.
    pub async fn get_days_for_plan(&self, plan_id: u64) -> Result<Vec<Day>> {
        self.with_db(move |db| db.get_days_for_plan(plan_id)).await
    }

    /// Retrieves a single day by its ID.
    pub async fn get_day(&self, day_id: u64) -> Result<Option<Day>> {
        self.with_db(move |db| db.get_day(day_id)).await
    }

    pub async fn update_day(&self, day_id: u64, day_number: u32) -> Result<usize> {
        self.with_db(move |db| db.update_day(day_id, day_number)).await
    }

    /// Deletes a day with its stops and their reviews.
    pub async fn delete_day(&self, day_id: u64) -> Result<usize> {
        self.with_db(move |db| db.delete_day(day_id)).await
    }
}
