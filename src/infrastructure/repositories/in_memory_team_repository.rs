//! In-memory team repository implementation

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::{RepositoryError, RepositoryResult};
use crate::domain::repositories::TeamRepository;
use crate::domain::team::Team;
use crate::domain::user::User;

#[derive(Debug, Default)]
struct Tables {
    teams: Vec<Team>,
    users: Vec<User>,
}

/// Thread-safe in-memory implementation of TeamRepository
///
/// Useful for testing and development. Rows keep insertion order, which plays
/// the role of store order. Data is lost when the process terminates.
#[derive(Debug, Default)]
pub struct InMemoryTeamRepository {
    tables: RwLock<Tables>,
    fault: Option<String>,
    leader_update_fault: Option<String>,
}

impl InMemoryTeamRepository {
    /// Creates a new empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populates the `users` table
    pub fn with_users(mut self, users: Vec<User>) -> Self {
        if let Ok(tables) = self.tables.get_mut() {
            tables.users = users;
        }
        self
    }

    /// Pre-populates the `teams` table
    pub fn with_teams(mut self, teams: Vec<Team>) -> Self {
        if let Ok(tables) = self.tables.get_mut() {
            tables.teams = teams;
        }
        self
    }

    /// Makes every operation fail as if the store were unreachable
    pub fn with_fault(mut self, message: impl Into<String>) -> Self {
        self.fault = Some(message.into());
        self
    }

    /// Makes the leader reassignment step of `create` fail
    ///
    /// The team row written earlier in the same `create` call is discarded,
    /// leaving the tables as they were before the call.
    pub fn with_leader_update_fault(mut self, message: impl Into<String>) -> Self {
        self.leader_update_fault = Some(message.into());
        self
    }

    /// Returns a stored user by id
    pub fn user(&self, id: Uuid) -> Option<User> {
        self.read()
            .ok()
            .and_then(|t| t.users.iter().find(|u| u.id == id).cloned())
    }

    fn check_fault(&self) -> RepositoryResult<()> {
        match &self.fault {
            Some(message) => Err(RepositoryError::Database(message.clone())),
            None => Ok(()),
        }
    }

    fn read(&self) -> RepositoryResult<RwLockReadGuard<'_, Tables>> {
        self.check_fault()?;
        self.tables
            .read()
            .map_err(|_| RepositoryError::Database("Lock poisoned".to_string()))
    }

    fn write(&self) -> RepositoryResult<RwLockWriteGuard<'_, Tables>> {
        self.check_fault()?;
        self.tables
            .write()
            .map_err(|_| RepositoryError::Database("Lock poisoned".to_string()))
    }
}

#[async_trait]
impl TeamRepository for InMemoryTeamRepository {
    async fn exists(&self, id: Uuid) -> RepositoryResult<bool> {
        Ok(self.read()?.teams.iter().any(|t| t.id() == id))
    }

    async fn list(&self) -> RepositoryResult<Vec<Team>> {
        Ok(self.read()?.teams.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<Team>> {
        Ok(self.read()?.teams.iter().find(|t| t.id() == id).cloned())
    }

    async fn find_members(&self, team_id: Uuid) -> RepositoryResult<Vec<User>> {
        Ok(self
            .read()?
            .users
            .iter()
            .filter(|u| u.team == Some(team_id))
            .cloned()
            .collect())
    }

    async fn create(&self, team: &Team) -> RepositoryResult<Option<Team>> {
        let mut tables = self.write()?;

        if tables.teams.iter().any(|t| t.id() == team.id()) {
            return Err(RepositoryError::Database(format!(
                "Failed to create team: duplicate id {}",
                team.id()
            )));
        }

        let before = tables.teams.len();
        tables.teams.push(team.clone());

        if let Some(message) = &self.leader_update_fault {
            tables.teams.truncate(before);
            return Err(RepositoryError::Database(format!(
                "Failed to assign team leader: {}",
                message
            )));
        }

        // A NULL leader matches no user, as `WHERE id = NULL` would
        if let Some(leader) = team.leader() {
            for user in tables.users.iter_mut().filter(|u| u.id == leader) {
                user.team = Some(team.id());
            }
        }

        Ok(Some(team.clone()))
    }
}
