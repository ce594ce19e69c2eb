//! Tests for the player profile endpoint.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use drydock::server::controller::player::{get_player, PlayerSearchParams};
use drydock_test_utils::fixtures::wows::mockito::{ACCOUNT_SEARCH_PATH, CLAN_MEMBERSHIP_PATH};

use super::*;

fn params(search: &str) -> Query<PlayerSearchParams> {
    Query(PlayerSearchParams {
        search: search.to_string(),
    })
}

/// Expect 200 OK with statistics, derived rates and clan
#[tokio::test]
async fn returns_profile_with_clan() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_account_search_endpoint("Hyziri", vec![factory::mock_account_entry(1, "Hyziri")], 1)
        .with_account_info_endpoint(1, Some(factory::mock_account_info(1, "Hyziri")), 1)
        .with_clan_membership_endpoint(1, Some(factory::mock_clan_membership(Some(500))), 1)
        .with_clan_info_endpoint(500, Some(factory::mock_clan_info()), 1)
        .build()
        .await?;

    let result = get_player(State(test.into_app_state()), params("Hyziri")).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    assert_eq!(body["player"]["nickname"], "Hyziri");
    assert_eq!(body["player"]["statistics"]["battles"], 100);
    assert_eq!(body["player"]["statistics"]["ratios"]["win_rate"], 0.55);
    assert_eq!(body["player"]["statistics"]["ratios"]["average_damage"], 65000.0);
    assert_eq!(body["clan"]["tag"], "AUTMN");
    assert_eq!(body["clan"]["members_count"], 21);
    assert!(body["clan"]["joined_at"].is_string());
    test.assert_mocks();

    Ok(())
}

/// Expect 200 OK with null clan and null rates for a clanless player without battles
#[tokio::test]
async fn returns_profile_without_clan() -> Result<(), TestError> {
    let info = factory::mock_account_info_with_statistics(
        1,
        "Newbie",
        Some(factory::mock_pvp_statistics(0, 0, 0, 0)),
    );
    let test = TestBuilder::new()
        .with_account_search_endpoint("Newbie", vec![factory::mock_account_entry(1, "Newbie")], 1)
        .with_account_info_endpoint(1, Some(info), 1)
        .with_unavailable_endpoint(CLAN_MEMBERSHIP_PATH, 1)
        .build()
        .await?;

    let resp = get_player(State(test.into_app_state()), params("Newbie"))
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert!(body["clan"].is_null());
    assert!(body["player"]["statistics"]["ratios"]["win_rate"].is_null());
    assert!(body["player"]["statistics"]["ratios"]["hit_ratio"].is_null());
    test.assert_mocks();

    Ok(())
}

/// Expect 400 Bad Request for a blank name
#[tokio::test]
async fn rejects_blank_name() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_unavailable_endpoint(ACCOUNT_SEARCH_PATH, 0)
        .build()
        .await?;

    let result = get_player(State(test.into_app_state()), params("   ")).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(resp).await["error"], "Please enter a player name");
    test.assert_mocks();

    Ok(())
}

/// Expect 404 Not Found when no player matches
#[tokio::test]
async fn player_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_account_search_endpoint("Nobody", Vec::new(), 1)
        .build()
        .await?;

    let result = get_player(State(test.into_app_state()), params("Nobody")).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(resp).await["error"], "Player not found");
    test.assert_mocks();

    Ok(())
}

/// Expect 502 Bad Gateway when the search fails
#[tokio::test]
async fn search_unavailable() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_unavailable_endpoint(ACCOUNT_SEARCH_PATH, 1)
        .build()
        .await?;

    let result = get_player(State(test.into_app_state()), params("Hyziri")).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(
        body_json(resp).await["error"],
        "Error searching player. Please try again."
    );
    test.assert_mocks();

    Ok(())
}
