//! Travel plan model definition.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// A trip: the top-level entity of the itinerary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TravelPlan {
    /// Store-assigned key
    pub plan_id: u64,

    /// Name the user gave the trip
    pub plan_name: String,

    /// Where the trip goes
    pub destination: String,

    /// First day of the trip
    pub start_date: Date,

    /// Last day of the trip; not required to follow `start_date`
    pub end_date: Date,
}
