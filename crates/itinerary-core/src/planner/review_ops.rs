//! Review operations for the TravelPlanner.

use super::TravelPlanner;
use crate::{error::Result, models::Review, params::ReviewFields};

impl TravelPlanner {
    /// Attaches a review to a stop.
    pub async fn add_review(&self, stop_id: u64, fields: ReviewFields) -> Result<u64> {
        self.with_db(move |db| db.add_review(stop_id, &fields)).await
    }

    /// Lists the reviews of a stop, newest first.
    pub async fn get_reviews_for_stop(&self, stop_id: u64) -> Result<Vec<Review>> {
        self.with_db(move |db| db.get_reviews_for_stop(stop_id)).await
    }

    pub async fn get_review(&self, review_id: u64) -> Result<Option<Review>> {
        self.with_db(move |db| db.get_review(review_id)).await
    }

    pub async fn update_review(&self, review_id: u64, fields: ReviewFields) -> Result<usize> {
        self.with_db(move |db| db.update_review(review_id, &fields))
            .await
    }

    pub async fn delete_review(&self, review_id: u64) -> Result<usize> {
        self.with_db(move |db| db.delete_review(review_id)).await
    }
}
