use uuid::Uuid;

/// Request to create a team
///
/// Both fields are optional. An empty name is treated as no name, so it is
/// stored as NULL rather than as an empty string.
///
/// # Example
/// ```
/// use teams_api::domain::team::value_objects::NewTeam;
///
/// let request = NewTeam::new(Some(String::new()), None);
/// assert!(request.name().is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewTeam {
    name: Option<String>,
    leader: Option<Uuid>,
}

impl NewTeam {
    pub fn new(name: Option<String>, leader: Option<Uuid>) -> Self {
        Self {
            name: name.filter(|n| !n.is_empty()),
            leader,
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn leader(&self) -> Option<Uuid> {
        self.leader
    }

    pub(crate) fn into_parts(self) -> (Option<String>, Option<Uuid>) {
        (self.name, self.leader)
    }
}
