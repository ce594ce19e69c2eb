//! Encyclopedia endpoints.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::{
    client::Client,
    error::Error,
    model::encyclopedia::{BattleType, Ship},
};

/// Endpoints under `/encyclopedia/`.
pub struct EncyclopediaEndpoints<'a> {
    client: &'a Client,
}

impl<'a> EncyclopediaEndpoints<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Fetches the ship catalog in the order returned by the API.
    ///
    /// Records the API returns as `null` are left out, as are records that cannot be
    /// decoded; a single bad record does not fail the whole catalog.
    pub async fn ships(&self) -> Result<Vec<Ship>, Error> {
        let data: Map<String, Value> = self
            .client
            .get("/encyclopedia/ships/", &self.language_params())
            .await?;

        Ok(collect_records(data, "ship_id", ship_id_from_key))
    }

    /// Fetches a single ship, localized with the configured language.
    ///
    /// # Returns
    /// - `Ok(Some(Ship))` - Ship found
    /// - `Ok(None)` - No ship with this ID
    /// - `Err(Error)` - Request failed or the API refused it
    pub async fn ship(&self, ship_id: i64) -> Result<Option<Ship>, Error> {
        let mut params = self.language_params();
        params.push(("ship_id", ship_id.to_string()));

        let data: Map<String, Value> = self.client.get("/encyclopedia/ships/", &params).await?;

        Ok(collect_records(data, "ship_id", ship_id_from_key)
            .into_iter()
            .find(|ship: &Ship| ship.ship_id == ship_id))
    }

    /// Fetches the battle type catalog in the order returned by the API.
    pub async fn battle_types(&self) -> Result<Vec<BattleType>, Error> {
        let data: Map<String, Value> = self
            .client
            .get("/encyclopedia/battletypes/", &self.language_params())
            .await?;

        Ok(collect_records(data, "id", |key| Value::String(key.to_string())))
    }

    fn language_params(&self) -> Vec<(&'static str, String)> {
        match self.client.config().language() {
            Some(language) => vec![("language", language.to_string())],
            None => Vec::new(),
        }
    }
}

fn ship_id_from_key(key: &str) -> Value {
    key.parse::<i64>()
        .map(Value::from)
        .unwrap_or_else(|_| Value::String(key.to_string()))
}

/// Decodes the records of an `id -> record` data map, keeping map order.
///
/// The map key is copied into `id_field` when the record does not carry it itself.
fn collect_records<T, F>(data: Map<String, Value>, id_field: &str, id_from_key: F) -> Vec<T>
where
    T: DeserializeOwned,
    F: Fn(&str) -> Value,
{
    data.into_iter()
        .filter_map(|(key, value)| {
            let mut record = match value {
                Value::Object(record) => record,
                Value::Null => return None,
                other => {
                    tracing::warn!("Skipping encyclopedia record {}: not an object: {}", key, other);
                    return None;
                }
            };

            if !record.contains_key(id_field) {
                record.insert(id_field.to_string(), id_from_key(&key));
            }

            match serde_json::from_value(Value::Object(record)) {
                Ok(record) => Some(record),
                Err(e) => {
                    tracing::warn!("Skipping malformed encyclopedia record {}: {}", key, e);
                    None
                }
            }
        })
        .collect()
}
