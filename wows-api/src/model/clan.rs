//! Clan membership and clan records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Account to clan link from `/clans/accountinfo/`.
///
/// `clan_id` is absent when the player is not in a clan.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClanMembership {
    #[serde(default)]
    pub clan_id: Option<i64>,
    /// Time the player joined the clan
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub joined_at: Option<DateTime<Utc>>,
}

/// Clan details from `/clans/info/`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClanInfo {
    pub tag: String,
    pub name: String,
    #[serde(default)]
    pub members_count: u32,
    #[serde(default)]
    pub leader_name: Option<String>,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub created_at: Option<DateTime<Utc>>,
}
