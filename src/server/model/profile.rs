use chrono::{DateTime, Utc};
use wows_api::model::{account::AccountInfo, clan::ClanInfo};

use crate::model::player::{ClanDto, PlayerDto, ProfileDto};

/// Outcome of a successful profile resolution.
#[derive(Clone, Debug)]
pub struct ResolvedProfile {
    pub player: AccountInfo,
    /// `None` when the player has no clan or a clan lookup failed
    pub clan: Option<ResolvedClan>,
}

/// Clan details merged with the player's membership.
#[derive(Clone, Debug)]
pub struct ResolvedClan {
    pub clan_id: i64,
    pub info: ClanInfo,
    pub joined_at: Option<DateTime<Utc>>,
}

impl From<ResolvedClan> for ClanDto {
    fn from(clan: ResolvedClan) -> Self {
        Self {
            clan_id: clan.clan_id,
            tag: clan.info.tag,
            name: clan.info.name,
            members_count: clan.info.members_count,
            leader_name: clan.info.leader_name,
            created_at: clan.info.created_at,
            joined_at: clan.joined_at,
        }
    }
}

impl From<ResolvedProfile> for ProfileDto {
    fn from(profile: ResolvedProfile) -> Self {
        Self {
            player: PlayerDto::from(profile.player),
            clan: profile.clan.map(ClanDto::from),
        }
    }
}
