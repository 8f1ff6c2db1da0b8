//! Pizza API server: reads config from env, ensures the database and schema, optionally
//! seeds demo data, then serves the HTTP routes.

use pizza_api::{app, apply_schema, ensure_database_exists, seed_demo_data, AppState, PgStore, ServerConfig};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("pizza_api=info,tower_http=info")),
        )
        .init();

    let config = ServerConfig::from_env()?;

    ensure_database_exists(&config.database_url).await?;
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;
    apply_schema(&pool).await?;

    let store = PgStore::new(pool);
    if config.seed_demo_data {
        seed_demo_data(&store).await?;
    }
    let state = AppState::new(store);

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app(state, config.body_limit)).await?;
    Ok(())
}
