//! Parameter structures for itinerary operations.
//!
//! These structures carry the mutable attribute set of each entity. Updates
//! are total: the same structure used to create a row replaces every mutable
//! attribute on update, so callers wanting a partial change read, modify and
//! write back.
//!
//! Each structure validates itself before any SQL is issued. The parsing
//! helpers at the bottom of the module convert raw form input into the values
//! these structures expect.

use jiff::{civil::Date, Timestamp};
use serde::{Deserialize, Serialize};

use crate::{
    error::{ItineraryError, Result},
    models::MediaUrls,
};

/// Lowest accepted review rating.
pub const MIN_RATING: u8 = 1;
/// Highest accepted review rating.
pub const MAX_RATING: u8 = 5;

/// Attributes of a travel plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanFields {
    /// Name of the trip (required)
    pub plan_name: String,
    /// Destination of the trip (required)
    pub destination: String,
    pub start_date: Date,
    pub end_date: Date,
}

impl PlanFields {
    pub fn validate(&self) -> Result<()> {
        require_text("plan_name", &self.plan_name)?;
        require_text("destination", &self.destination)
    }
}

/// Attributes of a stop other than its position.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StopFields {
    /// Name of the place (required)
    pub location_name: String,
    pub address: Option<String>,
    /// Latitude in degrees, `0` when unknown
    pub latitude: Option<f64>,
    /// Longitude in degrees, `0` when unknown
    pub longitude: Option<f64>,
    pub arrival_time: Option<String>,
    pub departure_time: Option<String>,
    pub notes: Option<String>,
    #[serde(default)]
    pub media_urls: MediaUrls,
}

impl StopFields {
    pub fn validate(&self) -> Result<()> {
        require_text("location_name", &self.location_name)?;
        require_finite("latitude", self.latitude)?;
        require_finite("longitude", self.longitude)
    }
}

/// Parameters for adding a stop to a day.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateStop {
    /// ID of the day to add the stop to
    pub day_id: u64,
    #[serde(flatten)]
    pub stop: StopFields,
    /// Explicit position; `None` appends after the last stop of the day
    #[serde(default)]
    pub order_index: Option<u32>,
}

/// Attributes of a review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewFields {
    /// Rating between 1 and 5
    pub rating: u8,
    pub comment: Option<String>,
    pub timestamp: Timestamp,
}

impl ReviewFields {
    pub fn validate(&self) -> Result<()> {
        validate_rating(self.rating)
    }
}

/// Checks that a day number is positive.
pub fn validate_day_number(day_number: u32) -> Result<()> {
    if day_number == 0 {
        return Err(ItineraryError::invalid_input("day_number").with_reason("must be at least 1"));
    }
    Ok(())
}

/// Checks that a rating lies in `1..=5`.
pub fn validate_rating(rating: u8) -> Result<()> {
    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(ItineraryError::invalid_input("rating").with_reason(format!(
            "{rating} is outside {MIN_RATING}-{MAX_RATING}"
        )));
    }
    Ok(())
}

/// Parses a coordinate typed by the user, falling back to the `0` "unknown"
/// sentinel when the text is not a finite number.
pub fn parse_coordinate(input: &str) -> f64 {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

/// Parses a rating typed by the user.
pub fn parse_rating(input: &str) -> Result<u8> {
    let rating = input.trim().parse::<u8>().map_err(|_| {
        ItineraryError::invalid_input("rating")
            .with_reason(format!("'{input}' is not a number between 1 and 5"))
    })?;
    validate_rating(rating)?;
    Ok(rating)
}

/// Parses a `YYYY-MM-DD` date typed by the user.
pub fn parse_date(field: &str, input: &str) -> Result<Date> {
    input.trim().parse::<Date>().map_err(|e| {
        ItineraryError::invalid_input(field).with_reason(format!("'{input}' is not a date: {e}"))
    })
}

fn require_text(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ItineraryError::invalid_input(field).with_reason("must not be empty"));
    }
    Ok(())
}

fn require_finite(field: &str, value: Option<f64>) -> Result<()> {
    match value {
        Some(v) if !v.is_finite() => Err(ItineraryError::invalid_input(field)
            .with_reason("must be a finite number; use 0 for unknown")),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn paris() -> PlanFields {
        PlanFields {
            plan_name: "Eurotrip".to_string(),
            destination: "Paris".to_string(),
            start_date: "2025-07-15".parse().unwrap(),
            end_date: "2025-07-30".parse().unwrap(),
        }
    }

    #[test]
    fn test_plan_fields_require_names() {
        assert!(paris().validate().is_ok());

        let blank_name = PlanFields {
            plan_name: "   ".to_string(),
            ..paris()
        };
        let err = blank_name.validate().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert!(err.to_string().contains("plan_name"));

        let blank_destination = PlanFields {
            destination: String::new(),
            ..paris()
        };
        assert!(blank_destination.validate().is_err());
    }

    #[test]
    fn test_plan_dates_are_not_ordered() {
        let reversed = PlanFields {
            start_date: "2025-08-01".parse().unwrap(),
            end_date: "2025-07-01".parse().unwrap(),
            ..paris()
        };
        assert!(reversed.validate().is_ok());
    }

    #[test]
    fn test_stop_fields_validation() {
        let stop = StopFields {
            location_name: "Louvre".to_string(),
            latitude: Some(0.0),
            longitude: Some(0.0),
            ..Default::default()
        };
        assert!(stop.validate().is_ok());

        let unnamed = StopFields::default();
        assert_eq!(
            unnamed.validate().unwrap_err().kind(),
            ErrorKind::Validation
        );

        let nan = StopFields {
            location_name: "Louvre".to_string(),
            latitude: Some(f64::NAN),
            ..Default::default()
        };
        assert!(nan.validate().is_err());
    }

    #[test]
    fn test_rating_bounds() {
        assert!(validate_rating(0).is_err());
        assert!(validate_rating(1).is_ok());
        assert!(validate_rating(5).is_ok());
        assert!(validate_rating(6).is_err());
    }

    #[test]
    fn test_day_number_must_be_positive() {
        assert!(validate_day_number(0).is_err());
        assert!(validate_day_number(1).is_ok());
    }

    #[test]
    fn test_parse_coordinate_falls_back_to_zero() {
        assert_eq!(parse_coordinate("48.8584"), 48.8584);
        assert_eq!(parse_coordinate(" -2.5 "), -2.5);
        assert_eq!(parse_coordinate(""), 0.0);
        assert_eq!(parse_coordinate("north"), 0.0);
        assert_eq!(parse_coordinate("NaN"), 0.0);
        assert_eq!(parse_coordinate("inf"), 0.0);
    }

    #[test]
    fn test_parse_rating() {
        assert_eq!(parse_rating("4").unwrap(), 4);
        assert!(parse_rating("0").is_err());
        assert!(parse_rating("9").is_err());
        assert!(parse_rating("great").is_err());
    }

    #[test]
    fn test_parse_date() {
        let date = parse_date("start_date", "2025-07-15").unwrap();
        assert_eq!(date.to_string(), "2025-07-15");

        let err = parse_date("start_date", "15/07/2025").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
    }
}
