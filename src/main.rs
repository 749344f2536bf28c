mod model;
mod server;

use tracing_subscriber::EnvFilter;

use crate::server::{config::Config, error::AppError, router, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "inter_backend=info,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;

    let address = config.bind_address();
    let app = router::router(AppState::new(db, config));

    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!("Listening on {}", address);
    tracing::info!("API documentation at http://{}/api/docs", address);

    axum::serve(listener, app).await?;

    Ok(())
}
