// Infrastructure layer module
// Contains database adapters and the teams data access object
// Follows Hexagonal Architecture

pub mod database;
pub mod logging;
pub mod repositories;
pub mod teams_dao;

pub use teams_dao::TeamsDao;
