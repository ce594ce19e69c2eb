use std::{net::SocketAddr, time::Duration};

use dioxus_logger::tracing::Level;

use crate::server::error::config::ConfigError;

pub static DEFAULT_API_URL: &str = wows_api::config::DEFAULT_API_URL;
pub static DEFAULT_LANGUAGE: &str = "en";
pub static DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Server configuration read from the environment.
pub struct Config {
    pub application_id: String,
    pub api_url: String,
    /// `None` when `WOWS_LANGUAGE` is set to an empty string
    pub language: Option<String>,
    pub request_timeout: Duration,
    pub contact_email: Option<String>,
    pub listen_addr: SocketAddr,
    pub log_level: Level,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// # Returns
    /// - `Ok(Config)` - All variables present and valid
    /// - `Err(ConfigError::MissingEnvVar)` - `WOWS_APPLICATION_ID` is unset or blank
    /// - `Err(ConfigError::InvalidEnvValue)` - A variable could not be parsed
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let application_id = lookup("WOWS_APPLICATION_ID")
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar("WOWS_APPLICATION_ID".to_string()))?;

        let api_url = lookup("WOWS_API_URL")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let language = match lookup("WOWS_LANGUAGE") {
            Some(value) if value.trim().is_empty() => None,
            Some(value) => Some(value.trim().to_string()),
            None => Some(DEFAULT_LANGUAGE.to_string()),
        };

        let request_timeout = match lookup("WOWS_REQUEST_TIMEOUT_SECS") {
            Some(value) => match value.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(ConfigError::InvalidEnvValue {
                        var: "WOWS_REQUEST_TIMEOUT_SECS".to_string(),
                        reason: format!("expected a positive number of seconds, got {:?}", value),
                    })
                }
            },
            None => Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        };

        let contact_email = lookup("CONTACT_EMAIL")
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty());

        let listen_addr = lookup("LISTEN_ADDR").unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string());
        let listen_addr = listen_addr
            .trim()
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvValue {
                var: "LISTEN_ADDR".to_string(),
                reason: e.to_string(),
            })?;

        let log_level = match lookup("LOG_LEVEL") {
            Some(value) => value
                .trim()
                .parse::<Level>()
                .map_err(|e| ConfigError::InvalidEnvValue {
                    var: "LOG_LEVEL".to_string(),
                    reason: e.to_string(),
                })?,
            None => Level::INFO,
        };

        Ok(Self {
            application_id,
            api_url,
            language,
            request_timeout,
            contact_email,
            listen_addr,
            log_level,
        })
    }

    /// User agent sent to the World of Warships API
    pub fn user_agent(&self) -> String {
        let version = env!("CARGO_PKG_VERSION");

        match &self.contact_email {
            Some(email) => format!("Drydock/{} ({})", version, email),
            None => format!("Drydock/{}", version),
        }
    }
}
