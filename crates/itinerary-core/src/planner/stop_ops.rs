//! Stop and stop-ordering operations for the TravelPlanner.

use super::TravelPlanner;
use crate::{
    error::Result,
    models::{RoutePoint, Stop},
    params::{CreateStop, StopFields},
};

impl TravelPlanner {
    /// Adds a stop to a day, appending it when no position is given.
    pub async fn add_stop(&self, new_stop: CreateStop) -> Result<u64> {
        self.with_db(move |db| db.add_stop(&new_stop)).await
    }

    /// Lists the stops of a day by ascending order index.
    pub async fn get_stops_for_day(&self, day_id: u64) -> Result<Vec<Stop>> {
        self.with_db(move |db| db.get_stops_for_day(day_id)).await
    }

    /// Retrieves a single stop by its ID.
    pub async fn get_stop(&self, stop_id: u64) -> Result<Option<Stop>> {
        self.with_db(move |db| db.get_stop(stop_id)).await
    }

    /// Replaces every attribute of a stop, including its position.
    pub async fn update_stop(
        &self,
        stop_id: u64,
        fields: StopFields,
        order_index: u32,
    ) -> Result<usize> {
        self.with_db(move |db| db.update_stop(stop_id, &fields, order_index))
            .await
    }

    /// Sets the order index of a single stop without touching its siblings.
    pub async fn update_stop_order(&self, stop_id: u64, order_index: u32) -> Result<usize> {
        self.with_db(move |db| db.update_stop_order(stop_id, order_index))
            .await
    }

    /// Deletes a stop and its reviews.
    pub async fn delete_stop(&self, stop_id: u64) -> Result<usize> {
        self.with_db(move |db| db.delete_stop(stop_id)).await
    }

    /// Rewrites the order of a day's stops in one transaction.
    pub async fn reorder_stops(&self, day_id: u64, stop_ids: Vec<u64>) -> Result<()> {
        self.with_db(move |db| db.reorder_stops(day_id, &stop_ids))
            .await
    }

    /// Returns the stops of a day that have known coordinates, in order.
    pub async fn get_route_for_day(&self, day_id: u64) -> Result<Vec<RoutePoint>> {
        self.with_db(move |db| db.get_route_for_day(day_id)).await
    }
}
