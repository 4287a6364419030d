// Domain layer module exports
// Records, the result envelope and the repository port
// Domain is independent of infrastructure concerns

pub mod errors;
pub mod repositories;
pub mod result;
pub mod team;
pub mod user;

pub use errors::{RepositoryError, RepositoryResult};
pub use result::ApiResult;
