//! Property requirement model matching the frontend Requirement interface.

use serde::{Deserialize, Serialize};

use super::Identified;

/// Residential or commercial requirement.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RequirementKind {
    Residential,
    Commercial,
}

/// A property requirement posted for brokers to pick up.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyRequirement {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    pub details: String,
    pub location: String,
    #[serde(rename = "type")]
    pub kind: RequirementKind,
}

impl Identified for PropertyRequirement {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Request body for creating a new requirement.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRequirementRequest {
    pub title: String,
    pub details: String,
    pub location: String,
    #[serde(rename = "type", default = "default_kind")]
    pub kind: RequirementKind,
}

fn default_kind() -> RequirementKind {
    RequirementKind::Residential
}

/// Request body for updating an existing requirement.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRequirementRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<RequirementKind>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_wire_spelling() {
        let requirement: PropertyRequirement = serde_json::from_str(
            r#"{"_id":"r-1","title":"2 BHK wanted","details":"Near station","location":"Borivali","type":"residential"}"#,
        )
        .unwrap();
        assert_eq!(requirement.kind, RequirementKind::Residential);

        let wire = serde_json::to_value(&requirement).unwrap();
        assert_eq!(wire["type"], "residential");
    }

    #[test]
    fn test_create_defaults_to_residential() {
        let request: CreateRequirementRequest = serde_json::from_str(
            r#"{"title":"Shop space","details":"Ground floor","location":"Andheri"}"#,
        )
        .unwrap();
        assert_eq!(request.kind, RequirementKind::Residential);
    }
}
