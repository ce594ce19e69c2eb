//! Fixture data factories.
//!
//! Each function returns a wire model populated with realistic test values. Endpoint
//! fixtures serialize these models into API envelopes, so the JSON the code under test
//! receives always has the shape the real API sends.

use chrono::{DateTime, Utc};
use serde_json::{json, Map, Value};
use wows_api::model::{
    account::{AccountInfo, AccountSearchEntry, AccountStatistics, BatteryStatistics, PvpStatistics},
    clan::{ClanInfo, ClanMembership},
    encyclopedia::{BattleType, Ship, ShipImages},
};

fn timestamp(secs: i64) -> Option<DateTime<Utc>> {
    DateTime::<Utc>::from_timestamp(secs, 0)
}

/// Create a mock ship.
///
/// # Arguments
/// - `ship_id` - Ship ID
/// - `name` - Ship name used for search
/// - `nation` - Nation facet value
/// - `tier` - Ship tier
pub fn mock_ship(ship_id: i64, name: &str, nation: &str, tier: u8) -> Ship {
    Ship {
        ship_id,
        ship_id_str: Some(format!("PJSB{}", ship_id % 1000)),
        name: Some(name.to_string()),
        nation: Some(nation.to_string()),
        tier: Some(tier),
        ship_type: Some("Battleship".to_string()),
        description: Some(format!("{} description", name)),
        is_premium: false,
        is_special: false,
        images: Some(ShipImages {
            small: Some(format!("https://glossary-wows-global.gcdn.co/icons/{}_small.png", ship_id)),
            medium: None,
            large: Some(format!("https://glossary-wows-global.gcdn.co/icons/{}_large.png", ship_id)),
            contour: None,
        }),
        default_profile: Some(json!({
            "armour": {"total": 410},
            "mobility": {"max_speed": 27.0, "turning_radius": 960},
            "weaponry": {"main_caliber": 460},
            "concealment": {"detect_distance_by_ship": 17.1}
        })),
        extra: Map::new(),
    }
}

/// Create a mock battle type.
///
/// # Arguments
/// - `id` - Battle type key, e.g. `PVP`
/// - `name` - Battle type name used for search
/// - `game_mode` - Optional game mode facet value
pub fn mock_battle_type(id: &str, name: &str, game_mode: Option<&str>) -> BattleType {
    BattleType {
        id: id.to_string(),
        name: Some(name.to_string()),
        description: Some(format!("{} description", name)),
        image: Some(format!("https://glossary-wows-global.gcdn.co/icons/{}.png", id.to_lowercase())),
        game_mode: game_mode.map(str::to_string),
        battle_type_tag: None,
        extra: Map::new(),
    }
}

/// Create a mock account search match.
pub fn mock_account_entry(account_id: i64, nickname: &str) -> AccountSearchEntry {
    AccountSearchEntry {
        account_id,
        nickname: nickname.to_string(),
    }
}

/// Create mock random battle statistics.
///
/// # Arguments
/// - `battles` - Battles played
/// - `wins` - Battles won
/// - `survived_battles` - Battles survived
/// - `damage_dealt` - Total damage dealt
pub fn mock_pvp_statistics(
    battles: u64,
    wins: u64,
    survived_battles: u64,
    damage_dealt: u64,
) -> PvpStatistics {
    PvpStatistics {
        battles,
        wins,
        survived_battles,
        damage_dealt,
        frags: wins,
        hits: battles * 30,
        shots: battles * 100,
        main_battery: Some(BatteryStatistics {
            hits: battles * 25,
            shots: battles * 80,
            frags: wins / 2,
        }),
    }
}

/// Create a mock account profile with 100 battles played.
pub fn mock_account_info(account_id: i64, nickname: &str) -> AccountInfo {
    mock_account_info_with_statistics(
        account_id,
        nickname,
        Some(mock_pvp_statistics(100, 55, 40, 6_500_000)),
    )
}

/// Create a mock account profile with the given random battle statistics.
pub fn mock_account_info_with_statistics(
    account_id: i64,
    nickname: &str,
    pvp: Option<PvpStatistics>,
) -> AccountInfo {
    AccountInfo {
        account_id,
        nickname: nickname.to_string(),
        created_at: timestamp(1545321114),
        last_battle_time: timestamp(1729000000),
        karma: Some(42),
        hidden_profile: false,
        statistics: Some(AccountStatistics { pvp }),
    }
}

/// Create a mock clan membership.
///
/// # Arguments
/// - `clan_id` - Clan the player belongs to, `None` for clanless players
pub fn mock_clan_membership(clan_id: Option<i64>) -> ClanMembership {
    ClanMembership {
        clan_id,
        joined_at: clan_id.and_then(|_| timestamp(1600000000)),
    }
}

/// Create mock clan details.
pub fn mock_clan_info() -> ClanInfo {
    ClanInfo {
        tag: "AUTMN".to_string(),
        name: "The Order of Autumn".to_string(),
        members_count: 21,
        leader_name: Some("Hyziri".to_string()),
        created_at: timestamp(1500000000),
    }
}

/// Wrap a payload in a successful API envelope.
pub fn ok_envelope(data: Value) -> String {
    let count = match &data {
        Value::Array(items) => items.len(),
        Value::Object(items) => items.len(),
        _ => 0,
    };

    json!({
        "status": "ok",
        "meta": {"count": count},
        "data": data,
    })
    .to_string()
}

/// Build an API error envelope.
///
/// # Arguments
/// - `code` - Wargaming error code, e.g. 407
/// - `message` - Error message, e.g. `INVALID_APPLICATION_ID`
/// - `field` - Request field the error refers to
pub fn error_envelope(code: u16, message: &str, field: &str) -> String {
    json!({
        "status": "error",
        "error": {
            "code": code,
            "message": message,
            "field": field,
            "value": null,
        },
    })
    .to_string()
}
