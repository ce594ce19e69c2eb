use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use wows_api::model::encyclopedia::{BattleType, Ship, ShipImages};

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ShipDto {
    pub ship_id: i64,
    pub ship_id_str: Option<String>,
    pub name: Option<String>,
    pub nation: Option<String>,
    pub tier: Option<u8>,
    #[serde(rename = "type")]
    pub ship_type: Option<String>,
    pub description: Option<String>,
    pub is_premium: bool,
    pub is_special: bool,
    pub images: Option<ShipImagesDto>,
    /// Stock configuration characteristics as returned by the encyclopedia
    #[schema(value_type = Option<Object>)]
    pub default_profile: Option<Value>,
    /// Remaining encyclopedia fields, unchanged
    #[schema(value_type = Object)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ShipImagesDto {
    pub small: Option<String>,
    pub medium: Option<String>,
    pub large: Option<String>,
    pub contour: Option<String>,
}

/// Filtered ship listing
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ShipListDto {
    /// Ships matching the search and nation filter, in catalog order
    pub ships: Vec<ShipDto>,
    /// Every nation present in the full catalog, sorted
    pub nations: Vec<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct BattleTypeDto {
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub game_mode: Option<String>,
    pub battle_type_tag: Option<String>,
    #[schema(value_type = Object)]
    pub extra: Map<String, Value>,
}

/// Filtered battle type listing
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct BattleTypeListDto {
    /// Battle types matching the search and game mode filter, in catalog order
    pub battle_types: Vec<BattleTypeDto>,
    /// Every game mode present in the full catalog, sorted
    pub game_modes: Vec<String>,
}

impl From<ShipImages> for ShipImagesDto {
    fn from(images: ShipImages) -> Self {
        Self {
            small: images.small,
            medium: images.medium,
            large: images.large,
            contour: images.contour,
        }
    }
}

impl From<Ship> for ShipDto {
    fn from(ship: Ship) -> Self {
        Self {
            ship_id: ship.ship_id,
            ship_id_str: ship.ship_id_str,
            name: ship.name,
            nation: ship.nation,
            tier: ship.tier,
            ship_type: ship.ship_type,
            description: ship.description,
            is_premium: ship.is_premium,
            is_special: ship.is_special,
            images: ship.images.map(ShipImagesDto::from),
            default_profile: ship.default_profile,
            extra: ship.extra,
        }
    }
}

impl From<BattleType> for BattleTypeDto {
    fn from(battle_type: BattleType) -> Self {
        Self {
            id: battle_type.id,
            name: battle_type.name,
            description: battle_type.description,
            image: battle_type.image,
            game_mode: battle_type.game_mode,
            battle_type_tag: battle_type.battle_type_tag,
            extra: battle_type.extra,
        }
    }
}
