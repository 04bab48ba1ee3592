//! Stop ordering: dense `order_index` assignment and reordering.
//!
//! The order indices of a day's stops form the permutation `0..N-1` after any
//! reorder. Rewrites happen inside one transaction so readers never see
//! duplicate or sparse indices, even if the process dies halfway.

use std::collections::BTreeSet;

use log::debug;
use rusqlite::params;

use super::{
    day_queries::CHECK_DAY_EXISTS_SQL, exists, query_all, run,
    stop_queries::GET_NEXT_ORDER_INDEX_SQL,
};
use crate::error::{DatabaseResultExt, ItineraryError, Result};

const SELECT_STOP_IDS_BY_DAY_SQL: &str = "SELECT stop_id FROM Stop WHERE day_id = ?1";
const UPDATE_STOP_ORDER_SQL: &str = "UPDATE Stop SET order_index = ?1 WHERE stop_id = ?2";
const UPDATE_STOP_ORDER_IN_DAY_SQL: &str =
    "UPDATE Stop SET order_index = ?1 WHERE stop_id = ?2 AND day_id = ?3";

impl super::Database {
    /// Rewrites the order of a day's stops so that each stop's index equals
    /// its position in `stop_ids`.
    ///
    /// `stop_ids` must hold every stop of the day exactly once. A sequence
    /// with missing, extra or repeated ids fails with
    /// [`ItineraryError::Conflict`] and leaves the day untouched.
    pub fn reorder_stops(&mut self, day_id: u64, stop_ids: &[u64]) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        if !exists(&tx, CHECK_DAY_EXISTS_SQL, day_id)? {
            return Err(ItineraryError::NotFound {
                entity: "Day",
                id: day_id,
            });
        }

        let current: BTreeSet<u64> = query_all(
            &tx,
            SELECT_STOP_IDS_BY_DAY_SQL,
            [day_id as i64],
            |row| row.get::<_, i64>(0).map(|id| id as u64),
        )?
        .into_iter()
        .collect();
        let requested: BTreeSet<u64> = stop_ids.iter().copied().collect();

        if requested.len() != stop_ids.len() {
            return Err(ItineraryError::Conflict {
                message: format!("stop order for day {day_id} repeats a stop"),
            });
        }
        if requested != current {
            let missing: Vec<u64> = current.difference(&requested).copied().collect();
            let unknown: Vec<u64> = requested.difference(&current).copied().collect();
            return Err(ItineraryError::Conflict {
                message: format!(
                    "stop order for day {day_id} does not match its stops \
                     (missing {missing:?}, not in day {unknown:?})"
                ),
            });
        }

        for (position, stop_id) in stop_ids.iter().enumerate() {
            run(
                &tx,
                UPDATE_STOP_ORDER_IN_DAY_SQL,
                params![position as i64, *stop_id as i64, day_id as i64],
            )?;
        }

        tx.commit().db_context("Failed to commit transaction")?;

        debug!("reordered {} stops of day {day_id}", stop_ids.len());
        Ok(())
    }

    /// Sets the order index of one stop.
    ///
    /// This is the single-row primitive behind drag-and-drop; it does not
    /// touch siblings, so on its own it can leave duplicate indices. Prefer
    /// [`reorder_stops`](Self::reorder_stops) for whole-day moves.
    pub fn update_stop_order(&mut self, stop_id: u64, order_index: u32) -> Result<usize> {
        let result = run(
            &self.connection,
            UPDATE_STOP_ORDER_SQL,
            params![i64::from(order_index), stop_id as i64],
        )?;
        Ok(result.changes)
    }

    /// Returns the index a stop appended to the day would get.
    pub fn next_order_index(&self, day_id: u64) -> Result<u32> {
        self.connection
            .query_row(GET_NEXT_ORDER_INDEX_SQL, [day_id as i64], |row| row.get(0))
            .db_context("Failed to get next order index")
    }
}
