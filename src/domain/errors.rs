use thiserror::Error;
use uuid::Uuid;

/// Errors raised while reading or writing teams
///
/// The display string of each variant is the message reported in the
/// `errors` list of an [`ApiResult`](crate::domain::ApiResult).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// Listing found an empty `teams` table. This is a business rule, not a
    /// store fault.
    #[error("No teams found")]
    NoTeamsFound,

    /// The insert statement returned no row
    #[error("Team was not created")]
    TeamNotCreated,

    #[error("Team not found: {0}")]
    TeamNotFound(Uuid),

    /// Connection or query failure reported by the store
    #[error("{0}")]
    Database(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;
