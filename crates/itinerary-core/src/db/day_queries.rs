//! Day CRUD operations and queries.

use log::debug;
use rusqlite::{params, Row};

use super::{exists, plan_queries::CHECK_PLAN_EXISTS_SQL, query_all, query_one, run};
use crate::{
    error::{DatabaseResultExt, ItineraryError, Result},
    models::Day,
    params::validate_day_number,
};

const INSERT_DAY_SQL: &str = "INSERT INTO Day (plan_id, day_number) VALUES (?1, ?2)";
const GET_NEXT_DAY_NUMBER_SQL: &str =
    "SELECT COALESCE(MAX(day_number), 0) + 1 FROM Day WHERE plan_id = ?1";
pub(crate) const SELECT_DAYS_BY_PLAN_SQL: &str =
    "SELECT day_id, plan_id, day_number FROM Day WHERE plan_id = ?1 ORDER BY day_number ASC, day_id ASC";
const SELECT_DAY_SQL: &str = "SELECT day_id, plan_id, day_number FROM Day WHERE day_id = ?1";
const UPDATE_DAY_SQL: &str = "UPDATE Day SET day_number = ?1 WHERE day_id = ?2";
const DELETE_DAY_SQL: &str = "DELETE FROM Day WHERE day_id = ?1";
pub(crate) const CHECK_DAY_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM Day WHERE day_id = ?1)";

impl super::Database {
    /// Helper function to construct a Day from a database row
    pub(crate) fn build_day_from_row(row: &Row<'_>) -> rusqlite::Result<Day> {
        Ok(Day {
            day_id: row.get::<_, i64>(0)? as u64,
            plan_id: row.get::<_, i64>(1)? as u64,
            day_number: row.get(2)?,
        })
    }

    /// Adds a day with an explicit number to a plan and returns its key.
    ///
    /// Day numbers are not required to be unique within a plan.
    pub fn add_day(&mut self, plan_id: u64, day_number: u32) -> Result<u64> {
        validate_day_number(day_number)?;

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        if !exists(&tx, CHECK_PLAN_EXISTS_SQL, plan_id)? {
            return Err(ItineraryError::NotFound {
                entity: "Travel plan",
                id: plan_id,
            });
        }

        let result = run(
            &tx,
            INSERT_DAY_SQL,
            params![plan_id as i64, day_number as i64],
        )?;

        tx.commit().db_context("Failed to commit transaction")?;

        debug!(
            "added day {} (number {day_number}) to plan {plan_id}",
            result.last_insert_row_id
        );
        Ok(result.last_insert_row_id)
    }

    /// Adds a day numbered one past the plan's highest day number, or 1 for
    /// a plan without days.
    pub fn add_next_day(&mut self, plan_id: u64) -> Result<Day> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        if !exists(&tx, CHECK_PLAN_EXISTS_SQL, plan_id)? {
            return Err(ItineraryError::NotFound {
                entity: "Travel plan",
                id: plan_id,
            });
        }

        let day_number: u32 = tx
            .query_row(GET_NEXT_DAY_NUMBER_SQL, [plan_id as i64], |row| row.get(0))
            .db_context("Failed to get next day number")?;

        let result = run(&tx, INSERT_DAY_SQL, params![plan_id as i64, day_number])?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Day {
            day_id: result.last_insert_row_id,
            plan_id,
            day_number,
        })
    }

    /// Returns the number the next day of a plan would get.
    pub fn next_day_number(&self, plan_id: u64) -> Result<u32> {
        self.connection
            .query_row(GET_NEXT_DAY_NUMBER_SQL, [plan_id as i64], |row| row.get(0))
            .db_context("Failed to get next day number")
    }

    /// Lists the days of a plan by ascending day number.
    pub fn get_days_for_plan(&self, plan_id: u64) -> Result<Vec<Day>> {
        query_all(
            &self.connection,
            SELECT_DAYS_BY_PLAN_SQL,
            [plan_id as i64],
            Self::build_day_from_row,
        )
    }

    /// Retrieves a single day by its ID.
    pub fn get_day(&self, day_id: u64) -> Result<Option<Day>> {
        query_one(
            &self.connection,
            SELECT_DAY_SQL,
            [day_id as i64],
            Self::build_day_from_row,
        )
    }

    /// Renumbers a day. Sibling days are left untouched.
    pub fn update_day(&mut self, day_id: u64, day_number: u32) -> Result<usize> {
        validate_day_number(day_number)?;

        let result = run(
            &self.connection,
            UPDATE_DAY_SQL,
            params![day_number as i64, day_id as i64],
        )?;
        Ok(result.changes)
    }

    /// Deletes a day together with its stops and their reviews. The numbers
    /// of the remaining days are not closed up.
    pub fn delete_day(&mut self, day_id: u64) -> Result<usize> {
        let result = run(&self.connection, DELETE_DAY_SQL, [day_id as i64])?;

        if result.changes > 0 {
            debug!("deleted day {day_id} and its stops");
        }
        Ok(result.changes)
    }
}
