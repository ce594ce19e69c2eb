use drydock_test_utils::fixtures::wows::mockito::BATTLE_TYPES_PATH;

use super::*;

fn battle_types() -> Vec<wows_api::model::encyclopedia::BattleType> {
    vec![
        factory::mock_battle_type("PVP", "Random Battle", Some("pvp")),
        factory::mock_battle_type("COOPERATIVE", "Co-op Battle", Some("pve")),
        factory::mock_battle_type("RANKED", "Ranked Battle", Some("pvp")),
        factory::mock_battle_type("EVENT", "Event", None),
    ]
}

/// Expect Ok with matching battle types and game modes from the full catalog
#[tokio::test]
async fn filters_by_search_and_game_mode() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_battle_types_endpoint(battle_types(), 1)
        .build()
        .await?;

    let service = EncyclopediaService::new(&test.api_client);
    let list = service.list_battle_types("battle", Some("pvp")).await.unwrap();

    let ids: Vec<_> = list.battle_types.iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids, vec!["PVP", "RANKED"]);
    assert_eq!(list.game_modes, vec!["pve", "pvp"]);
    test.assert_mocks();

    Ok(())
}

/// Expect Ok with every battle type for an empty search
#[tokio::test]
async fn lists_all_battle_types() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_battle_types_endpoint(battle_types(), 1)
        .build()
        .await?;

    let service = EncyclopediaService::new(&test.api_client);
    let list = service.list_battle_types("  ", None).await.unwrap();

    assert_eq!(list.battle_types.len(), 4);
    test.assert_mocks();

    Ok(())
}

/// Expect Ok with Some for a battle type in the catalog
#[tokio::test]
async fn gets_battle_type() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_battle_types_endpoint(battle_types(), 1)
        .build()
        .await?;

    let service = EncyclopediaService::new(&test.api_client);
    let battle_type = service.get_battle_type("COOPERATIVE").await.unwrap();

    assert_eq!(
        battle_type.and_then(|b| b.name),
        Some("Co-op Battle".to_string())
    );
    test.assert_mocks();

    Ok(())
}

/// Expect Ok with None for a battle type missing from the catalog
#[tokio::test]
async fn returns_none_for_unknown_battle_type() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_battle_types_endpoint(battle_types(), 1)
        .build()
        .await?;

    let service = EncyclopediaService::new(&test.api_client);
    let battle_type = service.get_battle_type("CLAN").await.unwrap();

    assert!(battle_type.is_none());
    test.assert_mocks();

    Ok(())
}

/// Expect Error when the API answers with an error envelope
#[tokio::test]
async fn fails_on_error_envelope() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_error_endpoint(BATTLE_TYPES_PATH, "INVALID_APPLICATION_ID", 1)
        .build()
        .await?;

    let service = EncyclopediaService::new(&test.api_client);
    let result = service.list_battle_types("", None).await;

    assert!(matches!(
        result,
        Err(Error::ApiError(wows_api::Error::Api { .. }))
    ));
    test.assert_mocks();

    Ok(())
}
