//! Travel plan CRUD operations and queries.

use log::debug;
use rusqlite::{params, Row};

use super::{parse_text_column, query_all, query_one, run};
use crate::{error::Result, models::TravelPlan, params::PlanFields};

const INSERT_PLAN_SQL: &str =
    "INSERT INTO TravelPlan (plan_name, destination, start_date, end_date) VALUES (?1, ?2, ?3, ?4)";
const SELECT_PLANS_SQL: &str = "SELECT plan_id, plan_name, destination, start_date, end_date FROM TravelPlan ORDER BY plan_id DESC";
pub(crate) const SELECT_PLAN_SQL: &str = "SELECT plan_id, plan_name, destination, start_date, end_date FROM TravelPlan WHERE plan_id = ?1";
const UPDATE_PLAN_SQL: &str = "UPDATE TravelPlan SET plan_name = ?1, destination = ?2, start_date = ?3, end_date = ?4 WHERE plan_id = ?5";
const DELETE_PLAN_SQL: &str = "DELETE FROM TravelPlan WHERE plan_id = ?1";
pub(crate) const CHECK_PLAN_EXISTS_SQL: &str =
    "SELECT EXISTS(SELECT 1 FROM TravelPlan WHERE plan_id = ?1)";

impl super::Database {
    /// Helper function to construct a TravelPlan from a database row
    pub(crate) fn build_plan_from_row(row: &Row<'_>) -> rusqlite::Result<TravelPlan> {
        Ok(TravelPlan {
            plan_id: row.get::<_, i64>(0)? as u64,
            plan_name: row.get(1)?,
            destination: row.get(2)?,
            start_date: parse_text_column(row, 3)?,
            end_date: parse_text_column(row, 4)?,
        })
    }

    /// Creates a new travel plan and returns its key.
    pub fn add_travel_plan(&mut self, fields: &PlanFields) -> Result<u64> {
        fields.validate()?;

        let result = run(
            &self.connection,
            INSERT_PLAN_SQL,
            params![
                fields.plan_name,
                fields.destination,
                fields.start_date.to_string(),
                fields.end_date.to_string()
            ],
        )?;

        debug!("created travel plan {}", result.last_insert_row_id);
        Ok(result.last_insert_row_id)
    }

    /// Lists every travel plan, most recently created first.
    pub fn get_travel_plans(&self) -> Result<Vec<TravelPlan>> {
        query_all(&self.connection, SELECT_PLANS_SQL, [], Self::build_plan_from_row)
    }

    /// Retrieves a travel plan by its ID.
    pub fn get_travel_plan(&self, plan_id: u64) -> Result<Option<TravelPlan>> {
        query_one(
            &self.connection,
            SELECT_PLAN_SQL,
            [plan_id as i64],
            Self::build_plan_from_row,
        )
    }

    /// Replaces every attribute of a travel plan. Returns the number of rows
    /// changed, which is 0 when the plan does not exist.
    pub fn update_travel_plan(&mut self, plan_id: u64, fields: &PlanFields) -> Result<usize> {
        fields.validate()?;

        let result = run(
            &self.connection,
            UPDATE_PLAN_SQL,
            params![
                fields.plan_name,
                fields.destination,
                fields.start_date.to_string(),
                fields.end_date.to_string(),
                plan_id as i64
            ],
        )?;
        Ok(result.changes)
    }

    /// Deletes a travel plan; its days, stops and reviews go with it through
    /// the schema's cascades. Deleting an absent plan changes nothing.
    pub fn delete_travel_plan(&mut self, plan_id: u64) -> Result<usize> {
        let result = run(&self.connection, DELETE_PLAN_SQL, [plan_id as i64])?;

        if result.changes > 0 {
            debug!("deleted travel plan {plan_id} and its descendants");
        }
        Ok(result.changes)
    }
}
