//! Integration tests for the PostgreSQL repository
//!
//! These tests verify that the repository and the teams DAO correctly
//! interact with a real database that already has the `teams` and `users`
//! tables. They need `DATABASE_URL` and are ignored by default:
//!
//! ```text
//! DATABASE_URL=postgresql://... cargo test -- --ignored
//! ```

use std::sync::Arc;

use sqlx::PgPool;
use teams_api::domain::repositories::TeamRepository;
use teams_api::domain::team::NewTeam;
use teams_api::infrastructure::repositories::PostgresTeamRepository;
use teams_api::infrastructure::TeamsDao;
use uuid::Uuid;

/// Set up test database connection pool
async fn setup_test_db() -> PgPool {
    let database_url = std::env::var("DATABASE_URL")
        .expect("DATABASE_URL must be set for integration tests");

    PgPool::connect(&database_url)
        .await
        .expect("Failed to connect to test database")
}

/// Create a test user with no team
async fn create_test_user(pool: &PgPool) -> Uuid {
    create_test_user_with_prefix(pool, "user").await
}

/// Create a test user whose username starts with `prefix`
async fn create_test_user_with_prefix(pool: &PgPool, prefix: &str) -> Uuid {
    let user_id = Uuid::new_v4();
    let suffix = &user_id.to_string()[..8];

    sqlx::query(
        "INSERT INTO users (id, username, email, first_name, last_name, team, is_admin)
         VALUES ($1, $2, $3, $4, $5, NULL, $6)",
    )
    .bind(user_id)
    .bind(format!("{}-{}", prefix, suffix))
    .bind(format!("{}-{}@test.com", prefix, suffix))
    .bind("Test")
    .bind("User")
    .bind(false)
    .execute(pool)
    .await
    .expect("Failed to create test user");

    user_id
}

async fn user_team(pool: &PgPool, user_id: Uuid) -> Option<Uuid> {
    sqlx::query_scalar::<_, Option<Uuid>>("SELECT team FROM users WHERE id = $1")
        .bind(user_id)
        .fetch_one(pool)
        .await
        .expect("Failed to fetch user")
}

/// Install a trigger that fails any update of a user named `reject-*`
async fn install_reject_trigger(pool: &PgPool) {
    let statements = [
        r#"
        CREATE OR REPLACE FUNCTION reject_marked_user_update() RETURNS trigger AS $$
        BEGIN
            IF OLD.username LIKE 'reject-%' THEN
                RAISE EXCEPTION 'leader update rejected';
            END IF;
            RETURN NEW;
        END;
        $$ LANGUAGE plpgsql
        "#,
        "DROP TRIGGER IF EXISTS reject_marked_user_update ON users",
        r#"
        CREATE TRIGGER reject_marked_user_update
        BEFORE UPDATE ON users
        FOR EACH ROW EXECUTE FUNCTION reject_marked_user_update()
        "#,
    ];

    for statement in statements {
        sqlx::query(statement)
            .execute(pool)
            .await
            .expect("Failed to install reject trigger");
    }
}

async fn drop_reject_trigger(pool: &PgPool) {
    sqlx::query("DROP TRIGGER IF EXISTS reject_marked_user_update ON users")
        .execute(pool)
        .await
        .expect("Failed to drop reject trigger");
    sqlx::query("DROP FUNCTION IF EXISTS reject_marked_user_update()")
        .execute(pool)
        .await
        .expect("Failed to drop reject function");
}

/// Clean up test data after each test
///
/// Detaches users first so that neither `users.team` nor `teams.leader`
/// blocks the deletes.
async fn cleanup(pool: &PgPool, user_ids: &[Uuid], team_ids: &[Uuid]) {
    for id in user_ids {
        sqlx::query("UPDATE users SET team = NULL WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await
            .expect("Failed to detach test user");
    }
    for id in team_ids {
        sqlx::query("DELETE FROM teams WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await
            .expect("Failed to cleanup test team");
    }
    for id in user_ids {
        sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await
            .expect("Failed to cleanup test user");
    }
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_insert_assigns_leader_and_find_returns_team() {
    let pool = setup_test_db().await;
    let leader = create_test_user(&pool).await;
    let dao = TeamsDao::new(Arc::new(PostgresTeamRepository::new(pool.clone())));

    let result = dao
        .insert(NewTeam::new(Some("Alpha".to_string()), Some(leader)))
        .await;

    assert_eq!(result.status, 200, "errors: {:?}", result.errors);
    let team = result.data.expect("team should be returned");
    assert_eq!(team.name(), Some("Alpha"));
    assert_eq!(team.leader(), Some(leader));
    assert_eq!(user_team(&pool, leader).await, Some(team.id()));

    // Test: Find team by ID
    let found = dao.find(team.id()).await;
    assert_eq!(found.data, Some(team.clone()));

    // Test: Leader is listed as a member
    let members = dao.members(team.id()).await;
    let members = members.data.expect("members should be returned");
    assert_eq!(members.len(), 1);
    assert_eq!(members[0].id, leader);

    // Test: Team shows up in the full listing
    let listed = dao.list().await;
    assert_eq!(listed.status, 200);
    assert!(listed.data.unwrap().iter().any(|t| t.id() == team.id()));

    cleanup(&pool, &[leader], &[team.id()]).await;
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_insert_rolls_back_when_leader_update_fails() {
    let pool = setup_test_db().await;
    install_reject_trigger(&pool).await;
    let leader = create_test_user_with_prefix(&pool, "reject").await;
    let dao = TeamsDao::new(Arc::new(PostgresTeamRepository::new(pool.clone())));

    let result = dao
        .insert(NewTeam::new(Some("Doomed".to_string()), Some(leader)))
        .await;

    assert_eq!(result.status, 500);
    assert!(result.data.is_none());
    assert!(
        result.errors[0].starts_with("Failed to assign team leader"),
        "errors: {:?}",
        result.errors
    );

    // The team insert ran in the same transaction and must be gone
    let teams: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM teams WHERE leader = $1")
        .bind(leader)
        .fetch_one(&pool)
        .await
        .expect("Failed to count teams");
    assert_eq!(teams, 0);
    assert_eq!(user_team(&pool, leader).await, None);

    // Cleanup updates the marker user, so the trigger goes first
    drop_reject_trigger(&pool).await;
    cleanup(&pool, &[leader], &[]).await;
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_insert_with_null_fields() {
    let pool = setup_test_db().await;
    let bystander = create_test_user(&pool).await;
    let dao = TeamsDao::new(Arc::new(PostgresTeamRepository::new(pool.clone())));

    let result = dao.insert(NewTeam::new(None, None)).await;

    assert_eq!(result.status, 200, "errors: {:?}", result.errors);
    let team = result.data.expect("team should be returned");
    assert!(team.name().is_none());
    assert!(team.leader().is_none());

    // `WHERE id = NULL` matches no user
    assert_eq!(user_team(&pool, bystander).await, None);

    cleanup(&pool, &[bystander], &[team.id()]).await;
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_exists() {
    let pool = setup_test_db().await;
    let repo = PostgresTeamRepository::new(pool.clone());
    let dao = TeamsDao::new(Arc::new(PostgresTeamRepository::new(pool.clone())));

    let team = dao
        .insert(NewTeam::new(Some("Exists".to_string()), None))
        .await
        .data
        .expect("team should be created");

    assert!(repo.exists(team.id()).await.expect("exists query"));
    assert!(!repo.exists(Uuid::new_v4()).await.expect("exists query"));

    cleanup(&pool, &[], &[team.id()]).await;
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_find_missing_team_is_failure() {
    let pool = setup_test_db().await;
    let dao = TeamsDao::new(Arc::new(PostgresTeamRepository::new(pool)));

    let result = dao.find(Uuid::new_v4()).await;

    assert_eq!(result.status, 500);
    assert_eq!(result.errors.len(), 1);
    assert!(result.data.is_none());
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_members_of_unknown_team_is_empty_success() {
    let pool = setup_test_db().await;
    let dao = TeamsDao::new(Arc::new(PostgresTeamRepository::new(pool)));

    let result = dao.members(Uuid::new_v4()).await;

    assert_eq!(result.status, 200);
    assert_eq!(result.data.map(|m| m.len()), Some(0));
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_store_fault_propagates_from_exists() {
    let pool = setup_test_db().await;
    pool.close().await;
    let repo = PostgresTeamRepository::new(pool);

    let result = repo.exists(Uuid::new_v4()).await;

    assert!(result.is_err(), "closed pool should fail");
}
