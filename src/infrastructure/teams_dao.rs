use std::sync::Arc;

use uuid::Uuid;

use crate::domain::errors::{RepositoryError, RepositoryResult};
use crate::domain::repositories::TeamRepository;
use crate::domain::result::ApiResult;
use crate::domain::team::{NewTeam, Team};
use crate::domain::user::User;

/// Data access object for teams
///
/// Applies the team business rules on top of a [`TeamRepository`] and
/// reports every outcome, except [`exists`](Self::exists), as an
/// [`ApiResult`] envelope. Cheap to clone: clones share one repository.
///
/// # Example
/// ```
/// use std::sync::Arc;
/// use teams_api::infrastructure::repositories::InMemoryTeamRepository;
/// use teams_api::infrastructure::TeamsDao;
///
/// # #[tokio::main]
/// # async fn main() {
/// let dao = TeamsDao::new(Arc::new(InMemoryTeamRepository::new()));
///
/// let result = dao.list().await;
/// assert_eq!(result.status, 500);
/// assert_eq!(result.errors, vec!["No teams found".to_string()]);
/// # }
/// ```
#[derive(Clone)]
pub struct TeamsDao {
    repository: Arc<dyn TeamRepository>,
}

impl TeamsDao {
    pub fn new(repository: Arc<dyn TeamRepository>) -> Self {
        Self { repository }
    }

    /// Checks whether a team exists
    ///
    /// Unlike the other operations this is not wrapped in an envelope: a
    /// store fault is returned to the caller as an error.
    pub async fn exists(&self, team_id: Uuid) -> RepositoryResult<bool> {
        self.repository.exists(team_id).await
    }

    /// Lists every team
    ///
    /// An empty `teams` table is reported as a failure ("No teams found").
    pub async fn list(&self) -> ApiResult<Vec<Team>> {
        envelope("list", self.list_teams().await)
    }

    /// Fetches one team by id
    pub async fn find(&self, team_id: Uuid) -> ApiResult<Team> {
        envelope("find", self.find_team(team_id).await)
    }

    /// Lists the users assigned to a team
    ///
    /// No members is a success with an empty list, not a failure.
    pub async fn members(&self, team_id: Uuid) -> ApiResult<Vec<User>> {
        envelope("members", self.repository.find_members(team_id).await)
    }

    /// Creates a team and moves its leader into it
    pub async fn insert(&self, new_team: NewTeam) -> ApiResult<Team> {
        envelope("insert", self.insert_team(new_team).await)
    }

    async fn list_teams(&self) -> RepositoryResult<Vec<Team>> {
        let teams = self.repository.list().await?;
        if teams.is_empty() {
            return Err(RepositoryError::NoTeamsFound);
        }
        Ok(teams)
    }

    async fn find_team(&self, team_id: Uuid) -> RepositoryResult<Team> {
        self.repository
            .find_by_id(team_id)
            .await?
            .ok_or(RepositoryError::TeamNotFound(team_id))
    }

    async fn insert_team(&self, new_team: NewTeam) -> RepositoryResult<Team> {
        let team = Team::new(new_team);
        self.repository
            .create(&team)
            .await?
            .ok_or(RepositoryError::TeamNotCreated)
    }
}

fn envelope<T>(operation: &str, result: RepositoryResult<T>) -> ApiResult<T> {
    if let Err(e) = &result {
        tracing::warn!(operation, error = %e, "Team operation failed");
    }
    result.into()
}
