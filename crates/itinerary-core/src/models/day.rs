//! Day model definition.

use serde::{Deserialize, Serialize};

/// An ordinal slot inside a travel plan.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Day {
    /// Store-assigned key
    pub day_id: u64,

    /// ID of the parent plan
    pub plan_id: u64,

    /// 1-based position shown to the user; gaps are allowed
    pub day_number: u32,
}
