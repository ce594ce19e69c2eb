//! Encyclopedia service layer.
//!
//! Fetches the ship and battle type catalogs from the World of Warships API and narrows
//! them with the catalog filter. Catalogs are fetched on every call; nothing is cached.

#[cfg(test)]
mod tests;

use crate::{
    model::encyclopedia::{BattleTypeDto, BattleTypeListDto, ShipDto, ShipListDto},
    server::{
        error::Error,
        util::catalog::{distinct_facet_values, filter_catalog},
    },
};

/// Service for ship and battle type listings and details.
pub struct EncyclopediaService<'a> {
    api_client: &'a wows_api::Client,
}

impl<'a> EncyclopediaService<'a> {
    /// Creates a new instance of EncyclopediaService.
    pub fn new(api_client: &'a wows_api::Client) -> Self {
        Self { api_client }
    }

    /// Lists ships matching a name search and an optional nation.
    ///
    /// # Arguments
    /// - `search` - Case-insensitive substring of the ship name, empty for all ships
    /// - `nation` - Exact nation to keep, `None` for every nation
    ///
    /// # Returns
    /// - `Ok(ShipListDto)` - Matching ships in catalog order plus every nation of the full catalog
    /// - `Err(Error::ApiError)` - The ship catalog could not be fetched
    pub async fn list_ships(&self, search: &str, nation: Option<&str>) -> Result<ShipListDto, Error> {
        let catalog = self.api_client.encyclopedia().ships().await?;

        let nations = distinct_facet_values(&catalog);
        let ships = filter_catalog(&catalog, search, nation)
            .into_iter()
            .cloned()
            .map(ShipDto::from)
            .collect();

        Ok(ShipListDto { ships, nations })
    }

    /// Fetches a single ship.
    ///
    /// # Returns
    /// - `Ok(Some(ShipDto))` - Ship found
    /// - `Ok(None)` - No ship with this ID
    /// - `Err(Error::ApiError)` - The request failed
    pub async fn get_ship(&self, ship_id: i64) -> Result<Option<ShipDto>, Error> {
        let ship = self.api_client.encyclopedia().ship(ship_id).await?;

        Ok(ship.map(ShipDto::from))
    }

    /// Lists battle types matching a name search and an optional game mode.
    ///
    /// # Returns
    /// - `Ok(BattleTypeListDto)` - Matching battle types plus every game mode of the full catalog
    /// - `Err(Error::ApiError)` - The battle type catalog could not be fetched
    pub async fn list_battle_types(
        &self,
        search: &str,
        game_mode: Option<&str>,
    ) -> Result<BattleTypeListDto, Error> {
        let catalog = self.api_client.encyclopedia().battle_types().await?;

        let game_modes = distinct_facet_values(&catalog);
        let battle_types = filter_catalog(&catalog, search, game_mode)
            .into_iter()
            .cloned()
            .map(BattleTypeDto::from)
            .collect();

        Ok(BattleTypeListDto {
            battle_types,
            game_modes,
        })
    }

    /// Looks up a battle type by its key in the battle type catalog.
    ///
    /// The API has no single battle type endpoint, so the whole catalog is fetched.
    pub async fn get_battle_type(&self, battle_type_id: &str) -> Result<Option<BattleTypeDto>, Error> {
        let catalog = self.api_client.encyclopedia().battle_types().await?;

        Ok(catalog
            .into_iter()
            .find(|battle_type| battle_type.id == battle_type_id)
            .map(BattleTypeDto::from))
    }
}
