use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::errors::ApiError;
use crate::domain::team::{NewTeam, Team};
use crate::domain::user::User;
use crate::domain::ApiResult;
use crate::infrastructure::TeamsDao;

/// Request body for creating a team
#[derive(Debug, Deserialize)]
pub struct CreateTeamRequest {
    pub name: Option<String>,
    pub leader: Option<String>,
}

impl TryFrom<CreateTeamRequest> for NewTeam {
    type Error = String;

    /// An empty leader is treated as no leader, like an empty name
    fn try_from(req: CreateTeamRequest) -> Result<Self, Self::Error> {
        let leader = match req.leader.as_deref() {
            None | Some("") => None,
            Some(raw) => Some(
                Uuid::parse_str(raw).map_err(|_| format!("Invalid leader id: {}", raw))?,
            ),
        };

        Ok(NewTeam::new(req.name, leader))
    }
}

/// Response from the existence check
#[derive(Debug, Serialize)]
pub struct ExistsResponse {
    pub exists: bool,
}

/// List all teams
///
/// GET /api/teams
pub async fn list_teams(State(dao): State<TeamsDao>) -> ApiResult<Vec<Team>> {
    dao.list().await
}

/// Create a new team, moving its leader into it
///
/// POST /api/teams
pub async fn create_team(
    State(dao): State<TeamsDao>,
    Json(req): Json<CreateTeamRequest>,
) -> ApiResult<Team> {
    match NewTeam::try_from(req) {
        Ok(new_team) => dao.insert(new_team).await,
        Err(message) => ApiResult::failure(message),
    }
}

/// Get a team by ID
///
/// GET /api/teams/:id
pub async fn get_team(State(dao): State<TeamsDao>, Path(id): Path<Uuid>) -> ApiResult<Team> {
    dao.find(id).await
}

/// Get the users assigned to a team
///
/// GET /api/teams/:id/members
pub async fn get_team_members(
    State(dao): State<TeamsDao>,
    Path(id): Path<Uuid>,
) -> ApiResult<Vec<User>> {
    dao.members(id).await
}

/// Check whether a team exists
///
/// GET /api/teams/:id/exists
pub async fn team_exists(
    State(dao): State<TeamsDao>,
    Path(id): Path<Uuid>,
) -> Result<Json<ExistsResponse>, ApiError> {
    let exists = dao.exists(id).await?;
    Ok(Json(ExistsResponse { exists }))
}
