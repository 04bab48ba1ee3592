#[cfg(test)]
mod model_tests {
    use jiff::Timestamp;

    use crate::{
        error::ErrorKind,
        models::{
            Coordinates, Day, DayWithStops, MediaUrls, Review, RoutePoint, Stop, TravelPlan,
            TravelPlanDetails,
        },
    };

    fn create_test_plan() -> TravelPlan {
        TravelPlan {
            plan_id: 1,
            plan_name: "Eurotrip".to_string(),
            destination: "Paris".to_string(),
            start_date: "2025-07-15".parse().unwrap(),
            end_date: "2025-07-30".parse().unwrap(),
        }
    }

    fn create_test_stop(stop_id: u64, name: &str, order_index: u32) -> Stop {
        Stop {
            stop_id,
            day_id: 1,
            location_name: name.to_string(),
            address: None,
            latitude: Some(48.8606),
            longitude: Some(2.3376),
            arrival_time: Some("09:30".to_string()),
            departure_time: Some("11:00".to_string()),
            notes: None,
            order_index,
            media_urls: MediaUrls::default(),
        }
    }

    #[test]
    fn test_media_urls_parse_array() {
        let urls: MediaUrls = r#"["https://a.example/1.jpg","https://a.example/2.jpg"]"#
            .parse()
            .unwrap();
        assert_eq!(urls.len(), 2);
        assert_eq!(urls[0], "https://a.example/1.jpg");
    }

    #[test]
    fn test_media_urls_reject_non_arrays() {
        for input in ["", "{}", "\"https://a.example\"", "[1, 2]", "null"] {
            let err = input.parse::<MediaUrls>().unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Validation, "input {input:?}");
        }
    }

    #[test]
    fn test_media_urls_empty_serializes_as_brackets() {
        assert_eq!(MediaUrls::default().to_json(), "[]");
        assert_eq!(MediaUrls::default().to_string(), "[]");

        let urls = MediaUrls::new(vec!["https://a.example/\"quoted\".jpg".to_string()]);
        let reparsed: MediaUrls = urls.to_json().parse().unwrap();
        assert_eq!(reparsed, urls);
    }

    #[test]
    fn test_coordinates_zero_is_unknown() {
        assert!(Coordinates::known(Some(48.8), Some(2.3)).is_some());
        assert!(Coordinates::known(Some(0.0), Some(0.0)).is_none());
        assert!(Coordinates::known(Some(48.8), Some(0.0)).is_none());
        assert!(Coordinates::known(None, Some(2.3)).is_none());
        assert!(Coordinates::known(None, None).is_none());
    }

    #[test]
    fn test_route_point_skips_unknown_stops() {
        let known = create_test_stop(10, "Louvre", 0);
        let point = RoutePoint::from_stop(&known).expect("stop has coordinates");
        assert_eq!(point.stop_id, 10);
        assert_eq!(point.coordinates.latitude, 48.8606);

        let unknown = Stop {
            latitude: Some(0.0),
            longitude: Some(0.0),
            ..create_test_stop(11, "Somewhere", 1)
        };
        assert!(RoutePoint::from_stop(&unknown).is_none());
    }

    #[test]
    fn test_day_serializes_with_column_names() {
        let day = Day {
            day_id: 1,
            plan_id: 1,
            day_number: 1,
        };
        let json = serde_json::to_value(day).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"day_id": 1, "plan_id": 1, "day_number": 1})
        );
    }

    #[test]
    fn test_details_flatten_parent_rows() {
        let details = TravelPlanDetails {
            plan: create_test_plan(),
            days: vec![DayWithStops {
                day: Day {
                    day_id: 1,
                    plan_id: 1,
                    day_number: 1,
                },
                stops: vec![create_test_stop(10, "Louvre", 0)],
            }],
        };

        let json = serde_json::to_value(&details).unwrap();
        assert_eq!(json["plan_name"], "Eurotrip");
        assert_eq!(json["start_date"], "2025-07-15");
        assert_eq!(json["days"][0]["day_number"], 1);
        assert_eq!(json["days"][0]["stops"][0]["location_name"], "Louvre");
        assert_eq!(json["days"][0]["stops"][0]["media_urls"], serde_json::json!([]));
        assert_eq!(details.stop_count(), 1);
    }

    #[test]
    fn test_plan_display() {
        let output = create_test_plan().to_string();
        assert!(output.contains("# Eurotrip"));
        assert!(output.contains("- Destination: Paris"));
        assert!(output.contains("- Dates: 2025-07-15 to 2025-07-30"));
    }

    #[test]
    fn test_stop_display() {
        let stop = create_test_stop(10, "Louvre", 0);
        let output = stop.to_string();
        assert!(output.starts_with("1. Louvre (09:30-11:00)"));

        let bare = Stop {
            arrival_time: Some(String::new()),
            departure_time: None,
            notes: Some("Book tickets".to_string()),
            media_urls: MediaUrls::new(vec!["https://a.example/1.jpg".to_string()]),
            ..create_test_stop(11, "Tower", 1)
        };
        let output = bare.to_string();
        assert!(output.starts_with("2. Tower\n"));
        assert!(output.contains("- Notes: Book tickets"));
        assert!(output.contains("- Media: 1"));
    }

    #[test]
    fn test_review_display() {
        let review = Review {
            review_id: 1,
            stop_id: 10,
            rating: 4,
            comment: Some("Crowded but worth it".to_string()),
            timestamp: Timestamp::from_second(1752573600).unwrap(),
        };
        let output = review.to_string();
        assert!(output.starts_with("Rating: 4/5"));
        assert!(output.contains("Crowded but worth it"));
    }

    #[test]
    fn test_details_display() {
        let empty = TravelPlanDetails {
            plan: create_test_plan(),
            days: vec![],
        };
        assert!(empty.to_string().contains("No days in this plan."));

        let details = TravelPlanDetails {
            plan: create_test_plan(),
            days: vec![DayWithStops {
                day: Day {
                    day_id: 1,
                    plan_id: 1,
                    day_number: 3,
                },
                stops: vec![],
            }],
        };
        let output = details.to_string();
        assert!(output.contains("## Day 3\nNo stops planned.\n"));
    }

    #[test]
    fn test_day_with_stops_display_has_no_gap_under_heading() {
        let day = DayWithStops {
            day: Day {
                day_id: 1,
                plan_id: 1,
                day_number: 1,
            },
            stops: vec![
                create_test_stop(10, "Louvre", 0),
                Stop {
                    arrival_time: None,
                    departure_time: None,
                    ..create_test_stop(11, "Tower", 1)
                },
            ],
        };
        assert_eq!(day.to_string(), "## Day 1\n1. Louvre (09:30-11:00)\n2. Tower\n");
    }

    #[test]
    fn test_stop_display_at_highest_index() {
        let stop = create_test_stop(10, "Louvre", u32::MAX);
        assert!(stop.to_string().starts_with("4294967296. Louvre"));
    }
}
