//! Stop CRUD operations and queries.

use log::debug;
use rusqlite::{params, OptionalExtension, Row};

use super::{day_queries::CHECK_DAY_EXISTS_SQL, exists, query_all, query_one, run};
use crate::{
    error::{DatabaseResultExt, ItineraryError, Result},
    models::{MediaUrls, Stop},
    params::{CreateStop, StopFields},
};

pub(crate) const GET_NEXT_ORDER_INDEX_SQL: &str =
    "SELECT COALESCE(MAX(order_index), -1) + 1 FROM Stop WHERE day_id = ?1";
const INSERT_STOP_SQL: &str = "INSERT INTO Stop (day_id, location_name, address, latitude, longitude, arrival_time, departure_time, notes, order_index, media_urls) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)";
pub(crate) const SELECT_STOPS_BY_DAY_SQL: &str = "SELECT stop_id, day_id, location_name, address, latitude, longitude, arrival_time, departure_time, notes, order_index, media_urls FROM Stop WHERE day_id = ?1 ORDER BY order_index ASC, stop_id ASC";
const SELECT_STOP_SQL: &str = "SELECT stop_id, day_id, location_name, address, latitude, longitude, arrival_time, departure_time, notes, order_index, media_urls FROM Stop WHERE stop_id = ?1";
const UPDATE_STOP_SQL: &str = "UPDATE Stop SET location_name = ?1, address = ?2, latitude = ?3, longitude = ?4, arrival_time = ?5, departure_time = ?6, notes = ?7, order_index = ?8, media_urls = ?9 WHERE stop_id = ?10";
const SELECT_STOP_POSITION_SQL: &str = "SELECT day_id, order_index FROM Stop WHERE stop_id = ?1";
const DELETE_STOP_SQL: &str = "DELETE FROM Stop WHERE stop_id = ?1";
const UPDATE_STOP_ORDERS_DECREMENT_SQL: &str =
    "UPDATE Stop SET order_index = order_index - 1 WHERE day_id = ?1 AND order_index > ?2";

impl super::Database {
    /// Helper function to construct a Stop from a database row
    pub(crate) fn build_stop_from_row(row: &Row<'_>) -> rusqlite::Result<Stop> {
        Ok(Stop {
            stop_id: row.get::<_, i64>(0)? as u64,
            day_id: row.get::<_, i64>(1)? as u64,
            location_name: row.get(2)?,
            address: row.get(3)?,
            latitude: row.get(4)?,
            longitude: row.get(5)?,
            arrival_time: row.get(6)?,
            departure_time: row.get(7)?,
            notes: row.get(8)?,
            // NULL positions from older rows sort first
            order_index: row.get::<_, Option<u32>>(9)?.unwrap_or(0),
            media_urls: row.get::<_, MediaUrls>(10)?,
        })
    }

    /// Adds a stop to a day and returns its key.
    ///
    /// Without an explicit `order_index` the stop is appended: it gets one
    /// past the highest index of the day, or 0 for an empty day.
    pub fn add_stop(&mut self, new_stop: &CreateStop) -> Result<u64> {
        new_stop.stop.validate()?;

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        if !exists(&tx, CHECK_DAY_EXISTS_SQL, new_stop.day_id)? {
            return Err(ItineraryError::NotFound {
                entity: "Day",
                id: new_stop.day_id,
            });
        }

        let order_index: i64 = match new_stop.order_index {
            Some(index) => i64::from(index),
            None => tx
                .query_row(GET_NEXT_ORDER_INDEX_SQL, [new_stop.day_id as i64], |row| {
                    row.get(0)
                })
                .db_context("Failed to get next order index")?,
        };

        let stop = &new_stop.stop;
        let result = run(
            &tx,
            INSERT_STOP_SQL,
            params![
                new_stop.day_id as i64,
                stop.location_name,
                stop.address,
                stop.latitude,
                stop.longitude,
                stop.arrival_time,
                stop.departure_time,
                stop.notes,
                order_index,
                stop.media_urls
            ],
        )?;

        tx.commit().db_context("Failed to commit transaction")?;

        debug!(
            "added stop {} to day {} at index {order_index}",
            result.last_insert_row_id, new_stop.day_id
        );
        Ok(result.last_insert_row_id)
    }

    /// Lists the stops of a day by ascending order index.
    pub fn get_stops_for_day(&self, day_id: u64) -> Result<Vec<Stop>> {
        query_all(
            &self.connection,
            SELECT_STOPS_BY_DAY_SQL,
            [day_id as i64],
            Self::build_stop_from_row,
        )
    }

    /// Retrieves a single stop by its ID.
    pub fn get_stop(&self, stop_id: u64) -> Result<Option<Stop>> {
        query_one(
            &self.connection,
            SELECT_STOP_SQL,
            [stop_id as i64],
            Self::build_stop_from_row,
        )
    }

    /// Replaces every attribute of a stop, including its position.
    ///
    /// Returns the number of rows changed, which is 0 when the stop does not
    /// exist.
    pub fn update_stop(
        &mut self,
        stop_id: u64,
        fields: &StopFields,
        order_index: u32,
    ) -> Result<usize> {
        fields.validate()?;

        let result = run(
            &self.connection,
            UPDATE_STOP_SQL,
            params![
                fields.location_name,
                fields.address,
                fields.latitude,
                fields.longitude,
                fields.arrival_time,
                fields.departure_time,
                fields.notes,
                i64::from(order_index),
                fields.media_urls,
                stop_id as i64
            ],
        )?;
        Ok(result.changes)
    }

    /// Deletes a stop and its reviews, closing the gap it leaves in the
    /// day's order indices. Deleting an absent stop changes nothing.
    pub fn delete_stop(&mut self, stop_id: u64) -> Result<usize> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let position: Option<(i64, i64)> = tx
            .query_row(SELECT_STOP_POSITION_SQL, [stop_id as i64], |row| {
                Ok((row.get(0)?, row.get::<_, Option<i64>>(1)?.unwrap_or(0)))
            })
            .optional()
            .db_context("Failed to query stop")?;

        let Some((day_id, order_index)) = position else {
            return Ok(0);
        };

        let result = run(&tx, DELETE_STOP_SQL, [stop_id as i64])?;

        // Update order of subsequent stops
        run(
            &tx,
            UPDATE_STOP_ORDERS_DECREMENT_SQL,
            params![day_id, order_index],
        )?;

        tx.commit().db_context("Failed to commit transaction")?;

        debug!("deleted stop {stop_id} from day {day_id}");
        Ok(result.changes)
    }
}
