//! Tests for the ship & battle type endpoints.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use drydock::server::controller::encyclopedia::{
    get_battle_type, get_ship, list_battle_types, list_ships, BattleTypeListParams, ShipListParams,
};
use drydock_test_utils::fixtures::wows::mockito::SHIPS_PATH;

use super::*;

fn ships() -> Vec<wows_api::model::encyclopedia::Ship> {
    vec![
        factory::mock_ship(4179605488, "Yamato", "japan", 10),
        factory::mock_ship(3762272240, "Montana", "usa", 10),
        factory::mock_ship(3340678128, "Bismarck", "germany", 8),
    ]
}

/// Expect 200 OK with filtered ships and all nations
#[tokio::test]
async fn list_ships_filters_by_nation() -> Result<(), TestError> {
    let test = TestBuilder::new().with_ships_endpoint(ships(), 1).build().await?;

    let params = ShipListParams {
        search: String::new(),
        nation: Some("usa".to_string()),
    };
    let result = list_ships(State(test.into_app_state()), Query(params)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    assert_eq!(body["ships"].as_array().unwrap().len(), 1);
    assert_eq!(body["ships"][0]["name"], "Montana");
    assert_eq!(body["nations"], serde_json::json!(["germany", "japan", "usa"]));
    test.assert_mocks();

    Ok(())
}

/// Expect an empty nation parameter to be treated as absent
#[tokio::test]
async fn list_ships_ignores_empty_nation() -> Result<(), TestError> {
    let test = TestBuilder::new().with_ships_endpoint(ships(), 1).build().await?;

    let params = ShipListParams {
        search: "a".to_string(),
        nation: Some(String::new()),
    };
    let resp = list_ships(State(test.into_app_state()), Query(params))
        .await
        .unwrap()
        .into_response();

    let body = body_json(resp).await;
    let names: Vec<_> = body["ships"]
        .as_array()
        .unwrap()
        .iter()
        .map(|ship| ship["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["Yamato", "Montana", "Bismarck"]);
    test.assert_mocks();

    Ok(())
}

/// Expect 500 Internal Server Error when the catalog cannot be fetched
#[tokio::test]
async fn list_ships_fails_when_api_unavailable() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_unavailable_endpoint(SHIPS_PATH, 1)
        .build()
        .await?;

    let result = list_ships(State(test.into_app_state()), Query(ShipListParams::default())).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    test.assert_mocks();

    Ok(())
}

/// Expect 200 OK for a known ship
#[tokio::test]
async fn get_ship_returns_ship() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_ship_endpoint(
            4179605488,
            Some(factory::mock_ship(4179605488, "Yamato", "japan", 10)),
            1,
        )
        .build()
        .await?;

    let resp = get_ship(State(test.into_app_state()), Path(4179605488))
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["ship_id"], 4179605488i64);
    assert_eq!(body["type"], "Battleship");
    test.assert_mocks();

    Ok(())
}

/// Expect 404 Not Found for an unknown ship
#[tokio::test]
async fn get_ship_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_ship_endpoint(1, None, 1).build().await?;

    let resp = get_ship(State(test.into_app_state()), Path(1))
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(resp).await["error"], "Ship not found");
    test.assert_mocks();

    Ok(())
}

/// Expect 200 OK with filtered battle types and all game modes
#[tokio::test]
async fn list_battle_types_filters_by_game_mode() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_battle_types_endpoint(
            vec![
                factory::mock_battle_type("PVP", "Random Battle", Some("pvp")),
                factory::mock_battle_type("COOPERATIVE", "Co-op Battle", Some("pve")),
            ],
            1,
        )
        .build()
        .await?;

    let params = BattleTypeListParams {
        search: String::new(),
        game_mode: Some("pve".to_string()),
    };
    let resp = list_battle_types(State(test.into_app_state()), Query(params))
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["battle_types"][0]["id"], "COOPERATIVE");
    assert_eq!(body["game_modes"], serde_json::json!(["pve", "pvp"]));
    test.assert_mocks();

    Ok(())
}

/// Expect 200 OK for a known battle type and 404 Not Found for an unknown one
#[tokio::test]
async fn get_battle_type_by_key() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_battle_types_endpoint(
            vec![factory::mock_battle_type("PVP", "Random Battle", Some("pvp"))],
            2,
        )
        .build()
        .await?;

    let found = get_battle_type(State(test.into_app_state()), Path("PVP".to_string()))
        .await
        .unwrap()
        .into_response();
    let missing = get_battle_type(State(test.into_app_state()), Path("CLAN".to_string()))
        .await
        .unwrap()
        .into_response();

    assert_eq!(found.status(), StatusCode::OK);
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    test.assert_mocks();

    Ok(())
}
