use super::value_objects::NewTeam;
use serde::Serialize;
use uuid::Uuid;

/// Team record
///
/// A named group of users with an optional leader. The team's id is
/// generated when the team is created and is never supplied by callers.
///
/// # Example
/// ```
/// use teams_api::domain::team::{NewTeam, Team};
/// use uuid::Uuid;
///
/// let leader = Uuid::new_v4();
/// let team = Team::new(NewTeam::new(Some("Alpha".to_string()), Some(leader)));
///
/// assert_eq!(team.name(), Some("Alpha"));
/// assert_eq!(team.leader(), Some(leader));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Team {
    id: Uuid,
    name: Option<String>,
    leader: Option<Uuid>,
}

impl Team {
    /// Creates a team from an insert request, generating a fresh v4 id
    pub fn new(new_team: NewTeam) -> Self {
        let (name, leader) = new_team.into_parts();
        Self {
            id: Uuid::new_v4(),
            name,
            leader,
        }
    }

    /// Returns the team's ID
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Returns the team's name, if one was given
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the id of the user leading this team
    pub fn leader(&self) -> Option<Uuid> {
        self.leader
    }

    /// Reconstructs a Team from a stored row
    ///
    /// # Note
    /// Only to be used by repository implementations for data reconstruction.
    pub fn from_persistence(id: Uuid, name: Option<String>, leader: Option<Uuid>) -> Self {
        Self { id, name, leader }
    }
}
