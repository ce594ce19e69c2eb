//! Tests for the route table, exercised through the full router.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use drydock::server::router;
use tower::ServiceExt;

use super::*;

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

/// Expect query parameters to reach the ship listing
#[tokio::test]
async fn routes_ship_listing() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_ships_endpoint(
            vec![
                factory::mock_ship(4179605488, "Yamato", "japan", 10),
                factory::mock_ship(3762272240, "Montana", "usa", 10),
            ],
            1,
        )
        .build()
        .await?;

    let app = router::routes().with_state(test.into_app_state());
    let resp = app.oneshot(get("/api/ships?search=yam&nation=")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["ships"].as_array().unwrap().len(), 1);
    test.assert_mocks();

    Ok(())
}

/// Expect the ship path parameter to be routed
#[tokio::test]
async fn routes_ship_details() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_ship_endpoint(
            3762272240,
            Some(factory::mock_ship(3762272240, "Montana", "usa", 10)),
            1,
        )
        .build()
        .await?;

    let app = router::routes().with_state(test.into_app_state());
    let resp = app.oneshot(get("/api/ships/3762272240")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await["name"], "Montana");
    test.assert_mocks();

    Ok(())
}

/// Expect the battle type listing to be routed
#[tokio::test]
async fn routes_battle_type_listing() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_battle_types_endpoint(
            vec![factory::mock_battle_type("PVP", "Random Battle", Some("pvp"))],
            1,
        )
        .build()
        .await?;

    let app = router::routes().with_state(test.into_app_state());
    let resp = app.oneshot(get("/api/battle-types?game_mode=pvp")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await["game_modes"], serde_json::json!(["pvp"]));
    test.assert_mocks();

    Ok(())
}

/// Expect a missing search parameter to be treated as an empty name
#[tokio::test]
async fn routes_player_lookup_without_search() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let app = router::routes().with_state(test.into_app_state());
    let resp = app.oneshot(get("/api/players")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect the OpenAPI document to list every endpoint
#[tokio::test]
async fn serves_openapi_document() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let app = router::routes().with_state(test.into_app_state());
    let resp = app.oneshot(get("/api/docs/openapi.json")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    for path in [
        "/api/ships",
        "/api/ships/{ship_id}",
        "/api/battle-types",
        "/api/battle-types/{battle_type_id}",
        "/api/players",
    ] {
        assert!(body["paths"].get(path).is_some(), "missing {}", path);
    }

    Ok(())
}
