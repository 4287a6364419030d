use std::sync::Arc;

use teams_api::api;
use teams_api::config::AppConfig;
use teams_api::infrastructure::repositories::PostgresTeamRepository;
use teams_api::infrastructure::{database, logging, TeamsDao};

#[tokio::main]
async fn main() {
    // Initialize tracing
    logging::init_logging("info");

    // Load configuration (also reads .env)
    let config = AppConfig::from_env().expect("Invalid configuration");

    // Connect to database
    let pool = database::connect(&config)
        .await
        .expect("Failed to connect to database");

    // One DAO per process, injected into the router state
    let dao = TeamsDao::new(Arc::new(PostgresTeamRepository::new(pool)));
    let app = api::router(dao);

    // Start server
    tracing::info!("Server listening on {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app).await.expect("Server failed");
}
