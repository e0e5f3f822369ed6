use crate::helpers::{spawn_app, spawn_app_with};
use actix_web::http::StatusCode;
use pov::domain::{Coordinate, LocationRecord};

#[tokio::test]
async fn get_locations_returns_the_seed_in_order() {
    // Arrange
    let app = spawn_app().await;

    // Act
    let response = app.get_locations().await;

    // Assert
    assert_eq!(StatusCode::OK.as_u16(), response.status().as_u16());

    let locations: Vec<LocationRecord> = response
        .json()
        .await
        .expect("Failed to parse response as JSON.");

    let ids: Vec<&str> = locations.iter().map(|l| l.id.as_str()).collect();
    assert_eq!(ids, ["sigiriya", "kandy", "galle"]);
}

#[tokio::test]
async fn get_location_returns_the_record() {
    // Arrange
    let app = spawn_app().await;

    // Act
    let response = app.get_location("galle").await;

    // Assert
    assert_eq!(StatusCode::OK.as_u16(), response.status().as_u16());

    let location: LocationRecord = response
        .json()
        .await
        .expect("Failed to parse response as JSON.");

    assert_eq!(location.name.as_str(), "Galle Fort");
    assert_eq!(location.coordinate, Coordinate::new(6.0535, 80.2210));
    assert_eq!(location.radius_km.km(), 1.0);
    assert_eq!(location.rarity.as_str(), "Common");
}

#[tokio::test]
async fn get_location_returns_404_for_an_unknown_id() {
    // Arrange
    let app = spawn_app().await;

    // Act
    let response = app.get_location("unknown-place").await;

    // Assert
    assert_eq!(StatusCode::NOT_FOUND.as_u16(), response.status().as_u16());
}

#[tokio::test]
async fn get_location_does_not_fold_case() {
    // Arrange
    let app = spawn_app().await;

    // Act
    let response = app.get_location("Kandy").await;

    // Assert
    assert_eq!(StatusCode::NOT_FOUND.as_u16(), response.status().as_u16());
}

#[tokio::test]
async fn configured_locations_replace_the_seed() {
    // Arrange
    let app = spawn_app_with(|c| {
        c.locations = vec![
            serde_json::from_value(serde_json::json!({
                "id": "adams-peak",
                "name": "Adam's Peak",
                "coordinate": { "lat": 6.8096, "lng": 80.4994 },
                "radius_km": 0.5,
                "rarity": "Legendary"
            }))
            .unwrap(),
        ];
    })
    .await;

    // Act
    let listed: Vec<LocationRecord> = app.get_locations().await.json().await.unwrap();
    let sigiriya = app.get_location("sigiriya").await;

    // Assert
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id.as_str(), "adams-peak");
    assert_eq!(StatusCode::NOT_FOUND.as_u16(), sigiriya.status().as_u16());
}
