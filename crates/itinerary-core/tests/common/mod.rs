#![allow(dead_code)]

use itinerary_core::{
    params::{CreateStop, PlanFields, ReviewFields, StopFields},
    Database,
};
use tempfile::NamedTempFile;

/// Helper function to create a temporary database for testing
pub fn create_test_db() -> (NamedTempFile, Database) {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let db = Database::open(temp_file.path()).expect("Failed to create test database");
    (temp_file, db)
}

pub fn eurotrip() -> PlanFields {
    PlanFields {
        plan_name: "Eurotrip".to_string(),
        destination: "Paris".to_string(),
        start_date: "2025-07-15".parse().unwrap(),
        end_date: "2025-07-30".parse().unwrap(),
    }
}

pub fn stop_fields(name: &str) -> StopFields {
    StopFields {
        location_name: name.to_string(),
        ..Default::default()
    }
}

pub fn new_stop(day_id: u64, name: &str, order_index: Option<u32>) -> CreateStop {
    CreateStop {
        day_id,
        stop: stop_fields(name),
        order_index,
    }
}

pub fn review(rating: u8, comment: &str, timestamp: &str) -> ReviewFields {
    ReviewFields {
        rating,
        comment: Some(comment.to_string()),
        timestamp: timestamp.parse().unwrap(),
    }
}
