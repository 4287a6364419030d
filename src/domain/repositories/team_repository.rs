use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryResult;
use crate::domain::team::Team;
use crate::domain::user::User;

/// Repository trait for teams and their members
///
/// Defines the contract for reading and creating teams.
/// Implementations report raw store outcomes; business rules such as
/// "an empty team list is an error" belong to the caller.
#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// Check whether a team with this ID is stored
    async fn exists(&self, id: Uuid) -> RepositoryResult<bool>;

    /// List every team in store order
    async fn list(&self) -> RepositoryResult<Vec<Team>>;

    /// Find a team by its ID
    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<Team>>;

    /// Find all users whose `team` column references this team
    async fn find_members(&self, team_id: Uuid) -> RepositoryResult<Vec<User>>;

    /// Insert a team and move its leader into it, all or nothing
    ///
    /// Returns the stored row, or `None` if the insert produced no row, in
    /// which case the leader is left untouched.
    async fn create(&self, team: &Team) -> RepositoryResult<Option<Team>>;
}
