//! Player profile resolution.
//!
//! A resolution turns a player name into a profile with four sequential API calls:
//!
//! 1. Account search, the first match is used
//! 2. Account info for the matched account
//! 3. Clan membership of the account (best-effort)
//! 4. Clan details, only when step 3 found a clan (best-effort)
//!
//! Steps 1 and 2 fail the resolution with a [`ResolutionError`]. Steps 3 and 4 never do:
//! any failure there is logged and the profile is returned without a clan.

#[cfg(test)]
mod tests;

use dioxus_logger::tracing;
use wows_api::model::{account::AccountInfo, clan::ClanMembership};

use crate::server::{
    error::profile::ResolutionError,
    model::profile::{ResolvedClan, ResolvedProfile},
};

/// Service resolving player names into profiles.
pub struct ProfileService<'a> {
    api_client: &'a wows_api::Client,
}

impl<'a> ProfileService<'a> {
    /// Creates a new instance of ProfileService.
    pub fn new(api_client: &'a wows_api::Client) -> Self {
        Self { api_client }
    }

    /// Resolves a player name into a profile and, when available, the player's clan.
    ///
    /// # Arguments
    /// - `query` - Player name; surrounding whitespace is ignored
    ///
    /// # Returns
    /// - `Ok(ResolvedProfile)` - Profile found, `clan` is `None` when the player has no
    ///   clan or the clan could not be fetched
    /// - `Err(ResolutionError::EmptyQuery)` - The query was blank, no request was sent
    /// - `Err(ResolutionError::NotFound)` - No player matches the query
    /// - `Err(ResolutionError::ProfileUnavailable)` - The search or account info request
    ///   failed, or the API returned no account info
    pub async fn resolve(&self, query: &str) -> Result<ResolvedProfile, ResolutionError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(ResolutionError::EmptyQuery);
        }

        let account_id = self.find_account_id(query).await?;
        let player = self.fetch_account_info(query, account_id).await?;

        let clan = match self.fetch_membership(account_id).await {
            Some((clan_id, membership)) => self.fetch_clan(clan_id, membership).await,
            None => None,
        };

        Ok(ResolvedProfile { player, clan })
    }

    async fn find_account_id(&self, query: &str) -> Result<i64, ResolutionError> {
        let matches = self
            .api_client
            .account()
            .search(query)
            .await
            .map_err(|e| ResolutionError::ProfileUnavailable {
                query: query.to_string(),
                reason: format!("account search failed: {}", e),
            })?;

        match matches.into_iter().next() {
            Some(entry) => Ok(entry.account_id),
            None => Err(ResolutionError::NotFound(query.to_string())),
        }
    }

    async fn fetch_account_info(
        &self,
        query: &str,
        account_id: i64,
    ) -> Result<AccountInfo, ResolutionError> {
        let info = self
            .api_client
            .account()
            .info(account_id)
            .await
            .map_err(|e| ResolutionError::ProfileUnavailable {
                query: query.to_string(),
                reason: format!("account info request for ID {} failed: {}", account_id, e),
            })?;

        info.ok_or_else(|| ResolutionError::ProfileUnavailable {
            query: query.to_string(),
            reason: format!("no account info returned for ID {}", account_id),
        })
    }

    async fn fetch_membership(&self, account_id: i64) -> Option<(i64, ClanMembership)> {
        let membership = match self.api_client.clans().account_info(account_id).await {
            Ok(membership) => membership,
            Err(e) => {
                tracing::warn!(
                    "Failed to fetch clan membership of account ID {}, continuing without clan: {}",
                    account_id,
                    e
                );
                return None;
            }
        };

        match membership {
            Some(membership) => match membership.clan_id {
                Some(clan_id) => Some((clan_id, membership)),
                None => {
                    tracing::debug!("Account ID {} is not in a clan", account_id);
                    None
                }
            },
            None => {
                tracing::debug!("No clan membership record for account ID {}", account_id);
                None
            }
        }
    }

    async fn fetch_clan(&self, clan_id: i64, membership: ClanMembership) -> Option<ResolvedClan> {
        match self.api_client.clans().info(clan_id).await {
            Ok(Some(info)) => Some(ResolvedClan {
                clan_id,
                info,
                joined_at: membership.joined_at,
            }),
            Ok(None) => {
                tracing::warn!("No clan info returned for clan ID {}, continuing without clan", clan_id);
                None
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to fetch clan info of clan ID {}, continuing without clan: {}",
                    clan_id,
                    e
                );
                None
            }
        }
    }
}
