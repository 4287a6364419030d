// Team domain module
// Contains the team record and the insert request

#![allow(clippy::module_inception)]

pub mod team;
pub mod value_objects;

// Re-export main types for convenience
pub use team::Team;
pub use value_objects::NewTeam;
