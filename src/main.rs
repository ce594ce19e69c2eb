use dioxus_logger::tracing;

use drydock::server::{config::Config, model::app::AppState, router, startup};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = dioxus_logger::init(config.log_level) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    if let Err(e) = run(config).await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

async fn run(config: Config) -> Result<(), drydock::server::error::Error> {
    let api_client = startup::build_api_client(&config)?;
    let listener = startup::bind_listener(&config).await?;

    tracing::info!("Starting server");

    let router = router::routes().with_state(AppState { api_client });
    axum::serve(listener, router).await?;

    Ok(())
}
