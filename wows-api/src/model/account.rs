//! Player account records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A match from `/account/list/`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AccountSearchEntry {
    pub account_id: i64,
    pub nickname: String,
}

/// Player profile from `/account/info/`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AccountInfo {
    pub account_id: i64,
    pub nickname: String,
    /// Account creation time
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub created_at: Option<DateTime<Utc>>,
    /// Time of the last battle played
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub last_battle_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub karma: Option<i64>,
    /// Whether the player hid their statistics; `statistics` is then absent
    #[serde(default)]
    pub hidden_profile: bool,
    #[serde(default)]
    pub statistics: Option<AccountStatistics>,
}

/// Statistics block of an [`AccountInfo`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountStatistics {
    /// Random battle statistics
    #[serde(default)]
    pub pvp: Option<PvpStatistics>,
}

/// Random battle statistics.
///
/// The API guarantees `battles >= wins`, `battles >= survived_battles` and
/// `shots >= hits`; nothing here enforces it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PvpStatistics {
    #[serde(default)]
    pub battles: u64,
    #[serde(default)]
    pub wins: u64,
    #[serde(default)]
    pub survived_battles: u64,
    #[serde(default)]
    pub damage_dealt: u64,
    #[serde(default)]
    pub frags: u64,
    #[serde(default)]
    pub hits: u64,
    #[serde(default)]
    pub shots: u64,
    #[serde(default)]
    pub main_battery: Option<BatteryStatistics>,
}

/// Per-armament statistics, e.g. main battery.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BatteryStatistics {
    #[serde(default)]
    pub hits: u64,
    #[serde(default)]
    pub shots: u64,
    #[serde(default)]
    pub frags: u64,
}
