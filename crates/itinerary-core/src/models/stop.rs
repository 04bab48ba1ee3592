//! Stop model definition and coordinate handling.

use serde::{Deserialize, Serialize};

use super::MediaUrls;

/// A geo-located point visited on a day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Stop {
    /// Store-assigned key
    pub stop_id: u64,

    /// ID of the parent day
    pub day_id: u64,

    /// Name of the place (required)
    pub location_name: String,

    pub address: Option<String>,

    /// Latitude in degrees; `0` means unknown
    pub latitude: Option<f64>,

    /// Longitude in degrees; `0` means unknown
    pub longitude: Option<f64>,

    /// Free-form `HH:MM` arrival time
    pub arrival_time: Option<String>,

    /// Free-form `HH:MM` departure time
    pub departure_time: Option<String>,

    pub notes: Option<String>,

    /// Position of the stop within its day (0-indexed)
    pub order_index: u32,

    /// Photo and video URLs attached to the stop
    #[serde(default)]
    pub media_urls: MediaUrls,
}

/// A known latitude/longitude pair.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// Builds a pair, treating NULL or `0` on either axis as unknown.
    pub fn known(latitude: Option<f64>, longitude: Option<f64>) -> Option<Self> {
        match (latitude, longitude) {
            (Some(latitude), Some(longitude)) if latitude != 0.0 && longitude != 0.0 => {
                Some(Self {
                    latitude,
                    longitude,
                })
            }
            _ => None,
        }
    }
}

impl Stop {
    /// Returns the stop's position, or `None` when it is unknown.
    pub fn coordinates(&self) -> Option<Coordinates> {
        Coordinates::known(self.latitude, self.longitude)
    }
}
