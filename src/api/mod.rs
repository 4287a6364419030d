// API layer module (adapters for controllers)
// Follows Hexagonal Architecture - API is an adapter

pub mod errors;
pub mod handlers;
pub mod response;

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::infrastructure::TeamsDao;
use handlers::{health, teams};

/// Builds the application router around a teams DAO
pub fn router(dao: TeamsDao) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Team routes
        .route("/api/teams", get(teams::list_teams).post(teams::create_team))
        .route("/api/teams/:id", get(teams::get_team))
        .route("/api/teams/:id/members", get(teams::get_team_members))
        .route("/api/teams/:id/exists", get(teams::team_exists))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        // Shared state
        .with_state(dao)
}
