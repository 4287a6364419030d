use sqlx::postgres::{PgPool, PgPoolOptions};

use crate::config::AppConfig;

/// Opens the PostgreSQL connection pool shared by the whole process
pub async fn connect(config: &AppConfig) -> Result<PgPool, sqlx::Error> {
    tracing::info!(
        max_connections = config.max_connections,
        "Connecting to database..."
    );

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;

    tracing::info!("Database connected successfully");
    Ok(pool)
}
