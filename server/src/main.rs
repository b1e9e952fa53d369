mod config;
mod error;
mod routes;
mod state;

use config::ServerConfig;
use error::ServerError;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    tracing_subscriber::fmt::init();

    let config = ServerConfig::from_env()?;
    match config.upstream_url.as_deref() {
        Some(upstream) => tracing::info!(%upstream, "draws API proxy enabled"),
        None => tracing::warn!("DRAWS_UPSTREAM_URL not set; /api requests will return 503"),
    }

    let state = state::AppState::new(&config)?;
    let app = routes::app(state)?;
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port))
        .await
        .map_err(ServerError::Bind)?;

    tracing::info!(port = config.port, "draw-dashboard listening");
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}
