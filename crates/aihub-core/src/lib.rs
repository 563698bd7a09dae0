// AI Hub Core
//
// Types shared by the API server and its tooling:
// - The static project document returned by every route
// - Logging initialization

pub mod project;
pub mod telemetry;

pub use project::{project_info, ProjectInfo, TeamMember};
