//! Composite read models built from several tables.

use serde::{Deserialize, Serialize};

use super::{Coordinates, Day, Stop, TravelPlan};

/// A plan with all of its days, each carrying its ordered stops.
///
/// Reviews are not embedded; they are fetched per stop on demand.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TravelPlanDetails {
    #[serde(flatten)]
    pub plan: TravelPlan,

    /// Days ordered by ascending day number
    pub days: Vec<DayWithStops>,
}

/// A day together with its stops ordered by ascending order index.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DayWithStops {
    #[serde(flatten)]
    pub day: Day,

    pub stops: Vec<Stop>,
}

/// One drawable point on a day's route.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoutePoint {
    pub stop_id: u64,
    pub location_name: String,
    pub order_index: u32,
    #[serde(flatten)]
    pub coordinates: Coordinates,
}

impl TravelPlanDetails {
    /// Total number of stops across all days.
    pub fn stop_count(&self) -> usize {
        self.days.iter().map(|day| day.stops.len()).sum()
    }
}

impl RoutePoint {
    /// Builds a route point from a stop, skipping stops without a known
    /// position.
    pub fn from_stop(stop: &Stop) -> Option<Self> {
        stop.coordinates().map(|coordinates| Self {
            stop_id: stop.stop_id,
            location_name: stop.location_name.clone(),
            order_index: stop.order_index,
            coordinates,
        })
    }
}
