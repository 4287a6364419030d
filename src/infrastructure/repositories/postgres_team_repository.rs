use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::errors::{RepositoryError, RepositoryResult};
use crate::domain::repositories::TeamRepository;
use crate::domain::team::Team;
use crate::domain::user::User;

/// Row of the `teams` table
#[derive(Debug, sqlx::FromRow)]
struct TeamRow {
    id: Uuid,
    name: Option<String>,
    leader: Option<Uuid>,
}

impl From<TeamRow> for Team {
    fn from(r: TeamRow) -> Self {
        Team::from_persistence(r.id, r.name, r.leader)
    }
}

/// Row of the `users` table
#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id: Uuid,
    username: String,
    email: String,
    first_name: String,
    last_name: String,
    team: Option<Uuid>,
    is_admin: bool,
}

impl From<UserRow> for User {
    fn from(r: UserRow) -> Self {
        User {
            id: r.id,
            username: r.username,
            email: r.email,
            first_name: r.first_name,
            last_name: r.last_name,
            team: r.team,
            is_admin: r.is_admin,
        }
    }
}

fn database_error(context: &str, e: sqlx::Error) -> RepositoryError {
    RepositoryError::Database(format!("{}: {}", context, e))
}

/// PostgreSQL implementation of TeamRepository
///
/// Runs parameterized SQL against the `teams` and `users` tables through a
/// shared SQLx connection pool.
pub struct PostgresTeamRepository {
    pool: PgPool,
}

impl PostgresTeamRepository {
    /// Creates a new PostgresTeamRepository
    ///
    /// # Arguments
    /// * `pool` - SQLx connection pool for PostgreSQL
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TeamRepository for PostgresTeamRepository {
    async fn exists(&self, id: Uuid) -> RepositoryResult<bool> {
        sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS (SELECT 1 FROM teams WHERE id = $1)
            "#,
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| database_error("Failed to check team existence", e))
    }

    async fn list(&self) -> RepositoryResult<Vec<Team>> {
        let rows = sqlx::query_as::<_, TeamRow>(
            r#"
            SELECT * FROM teams
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| database_error("Failed to list teams", e))?;

        Ok(rows.into_iter().map(Team::from).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<Team>> {
        let row = sqlx::query_as::<_, TeamRow>(
            r#"
            SELECT * FROM teams
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| database_error("Failed to find team by id", e))?;

        Ok(row.map(Team::from))
    }

    async fn find_members(&self, team_id: Uuid) -> RepositoryResult<Vec<User>> {
        let rows = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT * FROM users
            WHERE team = $1
            "#,
        )
        .bind(team_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| database_error("Failed to find team members", e))?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn create(&self, team: &Team) -> RepositoryResult<Option<Team>> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| database_error("Failed to begin transaction", e))?;

        let row = sqlx::query_as::<_, TeamRow>(
            r#"
            INSERT INTO teams (id, name, leader)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(team.id())
        .bind(team.name())
        .bind(team.leader())
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| database_error("Failed to create team", e))?;

        // Dropping `tx` without commit rolls the insert back
        let Some(row) = row else {
            return Ok(None);
        };

        let reassigned = sqlx::query(
            r#"
            UPDATE users SET team = $1
            WHERE id = $2
            "#,
        )
        .bind(row.id)
        .bind(team.leader())
        .execute(&mut *tx)
        .await
        .map_err(|e| database_error("Failed to assign team leader", e))?
        .rows_affected();

        tx.commit()
            .await
            .map_err(|e| database_error("Failed to commit team creation", e))?;

        tracing::debug!(team_id = %row.id, reassigned, "Team created");

        Ok(Some(row.into()))
    }
}
