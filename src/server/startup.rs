use dioxus_logger::tracing;
use tokio::net::TcpListener;

use crate::server::{config::Config, error::Error};

/// Build and configure the World of Warships API client from the server configuration
pub fn build_api_client(config: &Config) -> Result<wows_api::Client, Error> {
    let mut api_config = wows_api::Config::builder()
        .api_url(&config.api_url)
        .timeout(config.request_timeout);

    if let Some(language) = &config.language {
        api_config = api_config.language(language);
    }

    let api_client = wows_api::Client::builder()
        .config(api_config.build()?)
        .application_id(&config.application_id)
        .user_agent(&config.user_agent())
        .build()?;

    Ok(api_client)
}

/// Bind the HTTP listener to the configured address
pub async fn bind_listener(config: &Config) -> Result<TcpListener, Error> {
    let listener = TcpListener::bind(config.listen_addr).await?;

    tracing::info!("Listening on {}", config.listen_addr);

    Ok(listener)
}
