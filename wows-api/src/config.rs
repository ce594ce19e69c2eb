//! Client configuration.

use std::time::Duration;

use crate::error::Error;

/// Base URL of the Asia realm, the realm used when no URL is configured.
pub const DEFAULT_API_URL: &str = "https://api.worldofwarships.asia/wows";

/// Request timeout used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Connection settings for the World of Warships API.
///
/// Built with [`Config::builder`] and handed to [`ClientBuilder::config`](crate::ClientBuilder::config).
#[derive(Clone, Debug)]
pub struct Config {
    pub(crate) api_url: String,
    pub(crate) language: Option<String>,
    pub(crate) timeout: Duration,
}

impl Config {
    /// Creates a [`ConfigBuilder`] initialised with the default realm and timeout.
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Base URL requests are sent to, without a trailing slash.
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Language requested for localized encyclopedia fields.
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// Timeout applied to every request.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            language: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Builder for [`Config`].
pub struct ConfigBuilder {
    api_url: String,
    language: Option<String>,
    timeout: Duration,
}

impl ConfigBuilder {
    /// Creates a builder with the default realm URL, no language and the default timeout.
    pub fn new() -> Self {
        let config = Config::default();

        Self {
            api_url: config.api_url,
            language: config.language,
            timeout: config.timeout,
        }
    }

    /// Sets the base URL, e.g. `https://api.worldofwarships.eu/wows` for the EU realm.
    pub fn api_url(mut self, api_url: &str) -> Self {
        self.api_url = api_url.to_string();
        self
    }

    /// Sets the `language` parameter sent with encyclopedia requests.
    pub fn language(mut self, language: &str) -> Self {
        self.language = Some(language.to_string());
        self
    }

    /// Sets the per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Validates the settings and builds the [`Config`].
    ///
    /// # Returns
    /// - `Ok(Config)` - Settings are usable
    /// - `Err(Error::InvalidConfig)` - The URL is not an `http(s)://` URL, the language is
    ///   blank, or the timeout is zero
    pub fn build(self) -> Result<Config, Error> {
        let api_url = self.api_url.trim().trim_end_matches('/').to_string();
        if !(api_url.starts_with("http://") || api_url.starts_with("https://")) {
            return Err(Error::InvalidConfig(format!(
                "API URL must start with http:// or https://, got {:?}",
                self.api_url
            )));
        }

        if self.timeout.is_zero() {
            return Err(Error::InvalidConfig(
                "Request timeout must be greater than zero".to_string(),
            ));
        }

        let language = match self.language {
            Some(language) if language.trim().is_empty() => {
                return Err(Error::InvalidConfig(
                    "Language must not be blank".to_string(),
                ))
            }
            language => language,
        };

        Ok(Config {
            api_url,
            language,
            timeout: self.timeout,
        })
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
