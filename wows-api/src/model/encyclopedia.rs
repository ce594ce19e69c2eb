//! Ship and battle type encyclopedia records.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A ship from `/encyclopedia/ships/`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ship {
    /// Ship ID, also the key of the record in the response `data` map
    pub ship_id: i64,
    /// String form of the ship ID used by game clients
    #[serde(default)]
    pub ship_id_str: Option<String>,
    /// Localized ship name
    #[serde(default)]
    pub name: Option<String>,
    /// Nation code, e.g. `japan` or `usa`
    #[serde(default)]
    pub nation: Option<String>,
    /// Tier, 1 to 11
    #[serde(default)]
    pub tier: Option<u8>,
    /// Ship class, e.g. `Battleship` or `Destroyer`
    #[serde(default, rename = "type")]
    pub ship_type: Option<String>,
    /// Localized description
    #[serde(default)]
    pub description: Option<String>,
    /// Whether the ship is a premium ship
    #[serde(default)]
    pub is_premium: bool,
    /// Whether the ship is a special ship
    #[serde(default)]
    pub is_special: bool,
    /// Image URLs
    #[serde(default)]
    pub images: Option<ShipImages>,
    /// Stock configuration characteristics (armour, mobility, weaponry, concealment, ...)
    #[serde(default)]
    pub default_profile: Option<Value>,
    /// Every other field of the record, kept verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Image URLs of a [`Ship`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ShipImages {
    #[serde(default)]
    pub small: Option<String>,
    #[serde(default)]
    pub medium: Option<String>,
    #[serde(default)]
    pub large: Option<String>,
    #[serde(default)]
    pub contour: Option<String>,
}

/// A battle type from `/encyclopedia/battletypes/`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BattleType {
    /// Battle type key from the response `data` map, e.g. `PVP`
    pub id: String,
    /// Localized battle type name
    #[serde(default)]
    pub name: Option<String>,
    /// Localized description
    #[serde(default)]
    pub description: Option<String>,
    /// Image URL
    #[serde(default)]
    pub image: Option<String>,
    /// Game mode the battle type belongs to
    #[serde(default)]
    pub game_mode: Option<String>,
    /// Short tag of the battle type
    #[serde(default)]
    pub battle_type_tag: Option<String>,
    /// Every other field of the record, kept verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
