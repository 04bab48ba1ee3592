//! Travel plan operations for the TravelPlanner.

use super::TravelPlanner;
use crate::{
    error::Result,
    models::{TravelPlan, TravelPlanDetails},
    params::PlanFields,
};

impl TravelPlanner {
    /// Creates a new travel plan and returns its key.
    pub async fn add_travel_plan(&self, fields: PlanFields) -> Result<u64> {
        self.with_db(move |db| db.add_travel_plan(&fields)).await
    }

    /// Lists every travel plan, most recently created first.
    pub async fn get_travel_plans(&self) -> Result<Vec<TravelPlan>> {
        self.with_db(|db| db.get_travel_plans()).await
    }

    /// Retrieves a travel plan by its ID.
    pub async fn get_travel_plan(&self, plan_id: u64) -> Result<Option<TravelPlan>> {
        self.with_db(move |db| db.get_travel_plan(plan_id)).await
    }

    /// Replaces every attribute of a travel plan.
    pub async fn update_travel_plan(&self, plan_id: u64, fields: PlanFields) -> Result<usize> {
        self.with_db(move |db| db.update_travel_plan(plan_id, &fields))
            .await
    }

    /// Permanently deletes a travel plan with all its days, stops and
    /// reviews. This operation cannot be undone.
    pub async fn delete_travel_plan(&self, plan_id: u64) -> Result<usize> {
        self.with_db(move |db| db.delete_travel_plan(plan_id)).await
    }

    /// Loads a plan with its days and their ordered stops.
    pub async fn get_travel_plan_with_details(
        &self,
        plan_id: u64,
    ) -> Result<Option<TravelPlanDetails>> {
        self.with_db(move |db| db.get_travel_plan_with_details(plan_id))
            .await
    }
}
