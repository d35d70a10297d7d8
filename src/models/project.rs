//! Redevelopment and commercial project models.

use serde::{Deserialize, Serialize};

use super::Identified;

/// Lifecycle status of a redevelopment project.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ProjectStatus {
    Ongoing,
    Completed,
    Upcoming,
}

impl ProjectStatus {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Ongoing" => Some(ProjectStatus::Ongoing),
            "Completed" => Some(ProjectStatus::Completed),
            "Upcoming" => Some(ProjectStatus::Upcoming),
            _ => None,
        }
    }
}

/// Completion stage of a commercial project.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CommercialCompletion {
    #[serde(rename = "Ready to Move")]
    ReadyToMove,
    #[serde(rename = "Under Construction")]
    UnderConstruction,
    #[serde(rename = "Pre-Launch")]
    PreLaunch,
}

impl CommercialCompletion {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Ready to Move" => Some(CommercialCompletion::ReadyToMove),
            "Under Construction" => Some(CommercialCompletion::UnderConstruction),
            "Pre-Launch" => Some(CommercialCompletion::PreLaunch),
            _ => None,
        }
    }
}

/// A society redevelopment project with before/after imagery.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RedevelopmentProject {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub before_image: String,
    pub after_image: String,
    pub timeline: String,
    #[serde(default)]
    pub amenities: Vec<String>,
    pub status: ProjectStatus,
    pub units: u32,
}

impl Identified for RedevelopmentProject {
    fn id(&self) -> &str {
        &self.id
    }
}

/// A commercial project listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommercialProject {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub image: String,
    pub location: String,
    #[serde(rename = "type")]
    pub project_type: String,
    pub completion: CommercialCompletion,
}

impl Identified for CommercialProject {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Request body for creating a redevelopment project.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRedevelopmentRequest {
    pub name: String,
    pub before_image: String,
    pub after_image: String,
    pub timeline: String,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default = "default_status")]
    pub status: ProjectStatus,
    pub units: u32,
}

fn default_status() -> ProjectStatus {
    ProjectStatus::Ongoing
}

/// Request body for updating a redevelopment project.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRedevelopmentRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amenities: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ProjectStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub units: Option<u32>,
}

/// Request body for creating a commercial project.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommercialRequest {
    pub name: String,
    pub image: String,
    pub location: String,
    #[serde(rename = "type")]
    pub project_type: String,
    #[serde(default = "default_completion")]
    pub completion: CommercialCompletion,
}

fn default_completion() -> CommercialCompletion {
    CommercialCompletion::ReadyToMove
}

/// Request body for updating a commercial project.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCommercialRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub project_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completion: Option<CommercialCompletion>,
}

/// Trim amenity entries and drop blanks.
///
/// The admin form submits amenities as a comma-split list, which leaves
/// whitespace and empty segments around every comma.
pub fn normalize_amenities(amenities: &[String]) -> Vec<String> {
    amenities
        .iter()
        .map(|a| a.trim())
        .filter(|a| !a.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completion_wire_spelling() {
        let project: CommercialProject = serde_json::from_str(
            r#"{"id":"c-1","name":"Trade Tower","image":"","location":"BKC","type":"Office","completion":"Under Construction"}"#,
        )
        .unwrap();
        assert_eq!(project.completion, CommercialCompletion::UnderConstruction);

        let wire = serde_json::to_value(&project).unwrap();
        assert_eq!(wire["completion"], "Under Construction");
        assert_eq!(wire["type"], "Office");
    }

    #[test]
    fn test_normalize_amenities() {
        let raw = vec![
            " Gym".to_string(),
            "".to_string(),
            "Garden ".to_string(),
            "  ".to_string(),
            "Clubhouse".to_string(),
        ];
        assert_eq!(normalize_amenities(&raw), vec!["Gym", "Garden", "Clubhouse"]);
    }

    #[test]
    fn test_redevelopment_missing_amenities_defaults_empty() {
        let project: RedevelopmentProject = serde_json::from_str(
            r#"{"id":"r-1","name":"Shanti CHS","beforeImage":"","afterImage":"","timeline":"18 months","status":"Ongoing","units":48}"#,
        )
        .unwrap();
        assert!(project.amenities.is_empty());
    }
}
