//! Review model definition.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// A rating and optional comment attached to a stop.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Review {
    /// Store-assigned key
    pub review_id: u64,

    /// ID of the parent stop
    pub stop_id: u64,

    /// Rating between 1 and 5
    pub rating: u8,

    pub comment: Option<String>,

    /// When the review was written (UTC)
    pub timestamp: Timestamp,
}
