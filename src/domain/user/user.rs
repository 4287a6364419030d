use serde::Serialize;
use uuid::Uuid;

/// User data as read by the teams layer
///
/// Read-only from this crate's point of view, except for the `team`
/// reassignment performed when a user is made leader of a new team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub team: Option<Uuid>,
    pub is_admin: bool,
}
