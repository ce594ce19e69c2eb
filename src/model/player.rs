use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use wows_api::model::account::{AccountInfo, PvpStatistics};

/// A resolved player profile with the player's clan, if any
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ProfileDto {
    pub player: PlayerDto,
    /// Absent when the player has no clan or the clan could not be fetched
    pub clan: Option<ClanDto>,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PlayerDto {
    pub account_id: i64,
    pub nickname: String,
    pub created_at: Option<DateTime<Utc>>,
    pub last_battle_time: Option<DateTime<Utc>>,
    pub karma: Option<i64>,
    pub hidden_profile: bool,
    /// Random battle statistics, absent for hidden profiles
    pub statistics: Option<PvpStatisticsDto>,
}

/// Random battle counters and the rates derived from them
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PvpStatisticsDto {
    pub battles: u64,
    pub wins: u64,
    pub survived_battles: u64,
    pub damage_dealt: u64,
    pub frags: u64,
    pub hits: u64,
    pub shots: u64,
    pub main_battery_hits: Option<u64>,
    pub ratios: StatRatiosDto,
}

/// Derived rates, as fractions between 0 and 1 except `average_damage`.
///
/// A rate is `null` when its denominator is zero.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct StatRatiosDto {
    pub win_rate: Option<f64>,
    pub survival_rate: Option<f64>,
    pub hit_ratio: Option<f64>,
    pub average_damage: Option<f64>,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ClanDto {
    pub clan_id: i64,
    pub tag: String,
    pub name: String,
    pub members_count: u32,
    pub leader_name: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    /// When the player joined the clan
    pub joined_at: Option<DateTime<Utc>>,
}

fn ratio(numerator: u64, denominator: u64) -> Option<f64> {
    if denominator == 0 {
        return None;
    }

    Some(numerator as f64 / denominator as f64)
}

impl StatRatiosDto {
    pub fn from_statistics(statistics: &PvpStatistics) -> Self {
        Self {
            win_rate: ratio(statistics.wins, statistics.battles),
            survival_rate: ratio(statistics.survived_battles, statistics.battles),
            hit_ratio: ratio(statistics.hits, statistics.shots),
            average_damage: ratio(statistics.damage_dealt, statistics.battles),
        }
    }
}

impl From<PvpStatistics> for PvpStatisticsDto {
    fn from(statistics: PvpStatistics) -> Self {
        let ratios = StatRatiosDto::from_statistics(&statistics);

        Self {
            battles: statistics.battles,
            wins: statistics.wins,
            survived_battles: statistics.survived_battles,
            damage_dealt: statistics.damage_dealt,
            frags: statistics.frags,
            hits: statistics.hits,
            shots: statistics.shots,
            main_battery_hits: statistics.main_battery.map(|battery| battery.hits),
            ratios,
        }
    }
}

impl From<AccountInfo> for PlayerDto {
    fn from(info: AccountInfo) -> Self {
        Self {
            account_id: info.account_id,
            nickname: info.nickname,
            created_at: info.created_at,
            last_battle_time: info.last_battle_time,
            karma: info.karma,
            hidden_profile: info.hidden_profile,
            statistics: info
                .statistics
                .and_then(|statistics| statistics.pvp)
                .map(PvpStatisticsDto::from),
        }
    }
}
