//! HTTP client handle and builder.

use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::{
    config::Config,
    endpoints::{account::AccountEndpoints, clan::ClanEndpoints, encyclopedia::EncyclopediaEndpoints},
    error::Error,
    response::ApiResponse,
};

static DEFAULT_USER_AGENT: &str = concat!("wows-api/", env!("CARGO_PKG_VERSION"));

/// Handle to the World of Warships API.
///
/// Cloning is cheap; all clones share one connection pool and one immutable configuration,
/// so a single client can serve any number of concurrent requests.
#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientRef>,
}

struct ClientRef {
    http: reqwest::Client,
    config: Config,
    application_id: String,
}

impl Client {
    /// Creates a [`ClientBuilder`].
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Ship and battle type encyclopedia endpoints.
    pub fn encyclopedia(&self) -> EncyclopediaEndpoints<'_> {
        EncyclopediaEndpoints::new(self)
    }

    /// Account search & statistics endpoints.
    pub fn account(&self) -> AccountEndpoints<'_> {
        AccountEndpoints::new(self)
    }

    /// Clan membership & clan detail endpoints.
    pub fn clans(&self) -> ClanEndpoints<'_> {
        ClanEndpoints::new(self)
    }

    /// Configuration the client was built with.
    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    /// Sends a GET request to `path` and unwraps the response envelope.
    ///
    /// The application ID is always added to `params`. Non-success HTTP statuses and
    /// envelopes with a status other than `"ok"` are both reported as errors.
    pub(crate) async fn get<T>(&self, path: &str, params: &[(&str, String)]) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.inner.config.api_url, path);

        let mut query: Vec<(&str, &str)> = Vec::with_capacity(params.len() + 1);
        query.push(("application_id", self.inner.application_id.as_str()));
        query.extend(params.iter().map(|(key, value)| (*key, value.as_str())));

        tracing::debug!("GET {} {:?}", path, params);

        let response = self
            .inner
            .http
            .get(&url)
            .query(&query)
            .send()
            .await?
            .error_for_status()?;

        let envelope: ApiResponse<T> = response.json().await?;

        envelope.into_result(path)
    }
}

/// Builder for [`Client`].
pub struct ClientBuilder {
    config: Option<Config>,
    application_id: Option<String>,
    user_agent: Option<String>,
}

impl ClientBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self {
            config: None,
            application_id: None,
            user_agent: None,
        }
    }

    /// Sets the connection settings; [`Config::default`] is used otherwise.
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Sets the Wargaming application ID sent with every request. Required.
    pub fn application_id(mut self, application_id: &str) -> Self {
        self.application_id = Some(application_id.to_string());
        self
    }

    /// Sets the `User-Agent` header.
    pub fn user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = Some(user_agent.to_string());
        self
    }

    /// Builds the [`Client`].
    ///
    /// # Returns
    /// - `Ok(Client)` - Client ready to send requests
    /// - `Err(Error::InvalidConfig)` - No application ID was provided
    /// - `Err(Error::Request)` - The underlying HTTP client could not be created
    pub fn build(self) -> Result<Client, Error> {
        let application_id = match self.application_id {
            Some(id) if !id.trim().is_empty() => id,
            _ => {
                return Err(Error::InvalidConfig(
                    "An application ID is required".to_string(),
                ))
            }
        };

        let config = self.config.unwrap_or_default();
        let user_agent = self
            .user_agent
            .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string());

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Client {
            inner: Arc::new(ClientRef {
                http,
                config,
                application_id,
            }),
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
