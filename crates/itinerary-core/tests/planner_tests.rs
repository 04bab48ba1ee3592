mod common;

use common::{eurotrip, new_stop, review};
use itinerary_core::{ErrorKind, TravelPlanner, TravelPlannerBuilder};
use tempfile::TempDir;

async fn create_test_planner() -> (TempDir, TravelPlanner) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let planner = TravelPlannerBuilder::new()
        .with_database_path(temp_dir.path().join("travel_planner.db"))
        .build()
        .await
        .expect("Failed to create planner");
    (temp_dir, planner)
}

#[tokio::test]
async fn test_full_itinerary_workflow() {
    let (_temp_dir, planner) = create_test_planner().await;

    let plan_id = planner.add_travel_plan(eurotrip()).await.unwrap();
    let first = planner.add_next_day(plan_id).await.unwrap();
    let second = planner.add_next_day(plan_id).await.unwrap();
    assert_eq!((first.day_number, second.day_number), (1, 2));

    let louvre = planner
        .add_stop(new_stop(first.day_id, "Louvre", None))
        .await
        .unwrap();
    let tower = planner
        .add_stop(new_stop(first.day_id, "Tower", None))
        .await
        .unwrap();
    planner
        .add_stop(new_stop(second.day_id, "Versailles", None))
        .await
        .unwrap();

    planner
        .reorder_stops(first.day_id, vec![tower, louvre])
        .await
        .unwrap();
    planner
        .add_review(louvre, review(5, "Mona Lisa", "2025-07-15T16:00:00Z"))
        .await
        .unwrap();

    let details = planner
        .get_travel_plan_with_details(plan_id)
        .await
        .unwrap()
        .expect("Plan should exist");
    assert_eq!(details.days.len(), 2);
    assert_eq!(details.stop_count(), 3);
    let names: Vec<&str> = details.days[0]
        .stops
        .iter()
        .map(|s| s.location_name.as_str())
        .collect();
    assert_eq!(names, ["Tower", "Louvre"]);
    assert_eq!(planner.get_reviews_for_stop(louvre).await.unwrap().len(), 1);

    assert_eq!(planner.delete_stop(tower).await.unwrap(), 1);
    let remaining = planner.get_stops_for_day(first.day_id).await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].order_index, 0);

    assert_eq!(planner.delete_travel_plan(plan_id).await.unwrap(), 1);
    assert!(planner.get_travel_plans().await.unwrap().is_empty());
    assert!(planner.get_review(1).await.unwrap().is_none());
}

#[tokio::test]
async fn test_data_survives_reopen() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("travel_planner.db");

    let plan_id = {
        let planner = TravelPlannerBuilder::new()
            .with_database_path(&db_path)
            .build()
            .await
            .unwrap();
        let plan_id = planner.add_travel_plan(eurotrip()).await.unwrap();
        let day_id = planner.add_day(plan_id, 1).await.unwrap();
        planner
            .add_stop(new_stop(day_id, "Louvre", None))
            .await
            .unwrap();
        plan_id
    };

    let reopened = TravelPlannerBuilder::new()
        .with_database_path(&db_path)
        .build()
        .await
        .unwrap();
    let details = reopened
        .get_travel_plan_with_details(plan_id)
        .await
        .unwrap()
        .expect("Plan should persist");
    assert_eq!(details.plan.plan_name, "Eurotrip");
    assert_eq!(details.days[0].stops[0].location_name, "Louvre");
}

#[tokio::test]
async fn test_concurrent_callers_share_the_store() {
    let (_temp_dir, planner) = create_test_planner().await;
    let plan_id = planner.add_travel_plan(eurotrip()).await.unwrap();
    let day_id = planner.add_day(plan_id, 1).await.unwrap();

    let mut handles = Vec::new();
    for i in 0..8 {
        let planner = planner.clone();
        handles.push(tokio::spawn(async move {
            planner
                .add_stop(new_stop(day_id, &format!("Stop {i}"), None))
                .await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let indices: Vec<u32> = planner
        .get_stops_for_day(day_id)
        .await
        .unwrap()
        .iter()
        .map(|s| s.order_index)
        .collect();
    assert_eq!(indices, (0..8).collect::<Vec<u32>>());
}

#[tokio::test]
async fn test_errors_keep_their_kind() {
    let (_temp_dir, planner) = create_test_planner().await;

    let err = planner.add_day(7, 1).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);

    let plan_id = planner.add_travel_plan(eurotrip()).await.unwrap();
    let err = planner.add_day(plan_id, 0).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);

    assert_eq!(planner.update_day(99, 2).await.unwrap(), 0);
    assert_eq!(planner.delete_review(99).await.unwrap(), 0);
}

#[tokio::test]
async fn test_route_for_day() {
    let (_temp_dir, planner) = create_test_planner().await;
    let plan_id = planner.add_travel_plan(eurotrip()).await.unwrap();
    let day_id = planner.add_day(plan_id, 1).await.unwrap();

    let mut louvre = new_stop(day_id, "Louvre", None);
    louvre.stop.latitude = Some(48.8606);
    louvre.stop.longitude = Some(2.3376);
    planner.add_stop(louvre).await.unwrap();
    planner
        .add_stop(new_stop(day_id, "Somewhere", None))
        .await
        .unwrap();

    let route = planner.get_route_for_day(day_id).await.unwrap();
    assert_eq!(route.len(), 1);
    assert_eq!(route[0].location_name, "Louvre");
    assert_eq!(route[0].coordinates.longitude, 2.3376);
}
