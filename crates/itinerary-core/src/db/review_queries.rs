//! Review CRUD operations and queries.

use rusqlite::{params, Row};

use super::{exists, parse_text_column, query_all, query_one, run, timestamp_text};
use crate::{
    error::{DatabaseResultExt, ItineraryError, Result},
    models::Review,
    params::ReviewFields,
};

const CHECK_STOP_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM Stop WHERE stop_id = ?1)";
const INSERT_REVIEW_SQL: &str =
    "INSERT INTO Review (stop_id, rating, comment, timestamp) VALUES (?1, ?2, ?3, ?4)";
const SELECT_REVIEWS_BY_STOP_SQL: &str = "SELECT review_id, stop_id, rating, comment, timestamp FROM Review WHERE stop_id = ?1 ORDER BY timestamp DESC, review_id DESC";
const SELECT_REVIEW_SQL: &str =
    "SELECT review_id, stop_id, rating, comment, timestamp FROM Review WHERE review_id = ?1";
const UPDATE_REVIEW_SQL: &str =
    "UPDATE Review SET rating = ?1, comment = ?2, timestamp = ?3 WHERE review_id = ?4";
const DELETE_REVIEW_SQL: &str = "DELETE FROM Review WHERE review_id = ?1";

impl super::Database {
    /// Helper function to construct a Review from a database row
    fn build_review_from_row(row: &Row<'_>) -> rusqlite::Result<Review> {
        Ok(Review {
            review_id: row.get::<_, i64>(0)? as u64,
            stop_id: row.get::<_, i64>(1)? as u64,
            rating: row.get(2)?,
            comment: row.get(3)?,
            timestamp: parse_text_column(row, 4)?,
        })
    }

    /// Attaches a review to a stop and returns its key.
    pub fn add_review(&mut self, stop_id: u64, fields: &ReviewFields) -> Result<u64> {
        fields.validate()?;

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        if !exists(&tx, CHECK_STOP_EXISTS_SQL, stop_id)? {
            return Err(ItineraryError::NotFound {
                entity: "Stop",
                id: stop_id,
            });
        }

        let result = run(
            &tx,
            INSERT_REVIEW_SQL,
            params![
                stop_id as i64,
                i64::from(fields.rating),
                fields.comment,
                timestamp_text(&fields.timestamp)
            ],
        )?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(result.last_insert_row_id)
    }

    /// Lists the reviews of a stop, newest first.
    pub fn get_reviews_for_stop(&self, stop_id: u64) -> Result<Vec<Review>> {
        query_all(
            &self.connection,
            SELECT_REVIEWS_BY_STOP_SQL,
            [stop_id as i64],
            Self::build_review_from_row,
        )
    }

    /// Retrieves a single review by its ID.
    pub fn get_review(&self, review_id: u64) -> Result<Option<Review>> {
        query_one(
            &self.connection,
            SELECT_REVIEW_SQL,
            [review_id as i64],
            Self::build_review_from_row,
        )
    }

    /// Replaces the rating, comment and timestamp of a review.
    pub fn update_review(&mut self, review_id: u64, fields: &ReviewFields) -> Result<usize> {
        fields.validate()?;

        let result = run(
            &self.connection,
            UPDATE_REVIEW_SQL,
            params![
                i64::from(fields.rating),
                fields.comment,
                timestamp_text(&fields.timestamp),
                review_id as i64
            ],
        )?;
        Ok(result.changes)
    }

    /// Deletes a review. Deleting an absent review changes nothing.
    pub fn delete_review(&mut self, review_id: u64) -> Result<usize> {
        let result = run(&self.connection, DELETE_REVIEW_SQL, [review_id as i64])?;
        Ok(result.changes)
    }
}
