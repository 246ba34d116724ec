mod config;
mod routes;
mod state;

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] config::ConfigError),
    #[error("http client init failed: {0}")]
    HttpClient(#[from] reqwest::Error),
    #[error("{0}")]
    Leptos(String),
    #[error("server io failed: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    let _ = dotenvy::dotenv();
    let config = config::HostConfig::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&config.log_filter))
        .init();

    let state = state::AppState::new(&config)?;
    tracing::info!(api_url = %config.api_url, "stage race API upstream configured");

    let app = routes::app(state).map_err(StartupError::Leptos)?;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;

    tracing::info!(port = config.port, "stage-races listening");
    axum::serve(listener, app).await?;
    Ok(())
}
