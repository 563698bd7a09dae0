// Project document domain types
//
// The informational payload returned by every route. It is built once on
// first access and never changes for the life of the process.

use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// A named person and the role they hold on a team.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct TeamMember {
    /// Display name.
    pub name: String,
    /// Role description.
    pub role: String,
}

impl TeamMember {
    fn new(name: &str, role: &str) -> Self {
        Self {
            name: name.to_string(),
            role: role.to_string(),
        }
    }
}

/// Project metadata served by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct ProjectInfo {
    /// Name of the project.
    #[cfg_attr(feature = "openapi", schema(example = "AI Hub"))]
    pub project_name: String,
    /// Project manager.
    pub manager: String,
    /// Development team members.
    pub dev_team: Vec<TeamMember>,
    /// Testing team members.
    pub testing_team: Vec<TeamMember>,
    /// Short description of the project.
    pub description: String,
    /// Headline features.
    pub features: Vec<String>,
    /// Product modules.
    pub modules: Vec<String>,
}

static PROJECT_INFO: LazyLock<ProjectInfo> = LazyLock::new(|| ProjectInfo {
    project_name: "AI Hub".to_string(),
    manager: "Gowtham".to_string(),
    dev_team: vec![
        TeamMember::new("Mohammed Rishal", "Full stack Developer"),
        TeamMember::new("Richu", "Front Developer & Prompt Engineer"),
        TeamMember::new("Muneeb", "Full stack Developer"),
        TeamMember::new("Zaheer", "ML Engineer"),
        TeamMember::new("Harsh Vardhan", "AI/ML Engineer"),
        TeamMember::new("Afsal", "ML Engineer"),
        TeamMember::new("Gnanasekaran Perumal", "Back-end Developer"),
    ],
    testing_team: vec![
        TeamMember::new(
            "Somashekar N",
            "Manual & Automation Test Engineer, Prompt Engineer",
        ),
        TeamMember::new("Swathi", "Manual & Automation Test Engineer, Prompt Engineer"),
    ],
    description: "AI Hub on Neutrinos is a framework for integrating AI/ML into apps with NLP, \
                  GenAI, analytics, and automation."
        .to_string(),
    features: [
        "Ready-to-use AI Models",
        "Custom Model Integration",
        "API-First AI as a Service",
        "Workflow Automation",
        "Scalability for Enterprises",
    ]
    .into_iter()
    .map(String::from)
    .collect(),
    modules: [
        "Dashboard",
        "Prediction",
        "Extraction",
        "Tokens",
        "Assistant",
        "Knowledge",
        "Audit Logs",
        "Deployment",
    ]
    .into_iter()
    .map(String::from)
    .collect(),
});

/// The project document shared by every route.
pub fn project_info() -> &'static ProjectInfo {
    &PROJECT_INFO
}
