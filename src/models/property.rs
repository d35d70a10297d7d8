//! Property model matching the frontend Property interface.

use serde::{Deserialize, Serialize};

use super::Identified;

/// Availability of a property.
///
/// The upstream data mixes two vocabularies: the admin forms write
/// `Available`/`Sold`/`Pending`, while older listing records carry
/// `ready`/`under-construction`/`Ready to move`. The enum covers the union so
/// no record fails to deserialize.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Availability {
    Available,
    Sold,
    Pending,
    #[serde(rename = "ready")]
    Ready,
    #[serde(rename = "under-construction")]
    UnderConstruction,
    #[serde(rename = "Ready to move")]
    ReadyToMove,
}

impl Availability {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Available" => Some(Availability::Available),
            "Sold" => Some(Availability::Sold),
            "Pending" => Some(Availability::Pending),
            "ready" => Some(Availability::Ready),
            "under-construction" => Some(Availability::UnderConstruction),
            "Ready to move" => Some(Availability::ReadyToMove),
            _ => None,
        }
    }
}

/// A property listing.
///
/// `property_type` and `bedrooms` are optional because older upstream records
/// omit them; a missing field simply never matches a non-empty filter.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    pub location: String,
    pub original_price: f64,
    pub discounted_price: f64,
    /// Carpet area in sq.ft
    pub area: f64,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub property_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bedrooms: Option<u32>,
    pub availability: Availability,
    /// Remote URL or inline `data:` URI
    pub image: String,
}

impl Identified for Property {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Request body for creating a new property.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePropertyRequest {
    pub title: String,
    pub location: String,
    pub original_price: f64,
    pub discounted_price: f64,
    pub area: f64,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub property_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bedrooms: Option<u32>,
    #[serde(default = "default_availability")]
    pub availability: Availability,
    pub image: String,
}

fn default_availability() -> Availability {
    Availability::Available
}

/// Request body for updating an existing property.
///
/// Forwarded upstream as a partial record; `None` fields are omitted from the
/// wire so the upstream merge leaves them untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePropertyRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discounted_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<f64>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub property_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bedrooms: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability: Option<Availability>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_availability_round_trip() {
        for value in [
            "Available",
            "Sold",
            "Pending",
            "ready",
            "under-construction",
            "Ready to move",
        ] {
            let parsed = Availability::from_str(value).expect(value);
            assert_eq!(serde_json::to_value(parsed).unwrap(), value);
        }
        assert!(Availability::from_str("available").is_none());
    }

    #[test]
    fn test_property_accepts_mongo_id() {
        let json = r#"{
            "_id": "665f1c2e9a",
            "title": "Sunrise Heights",
            "location": "Mumbai",
            "originalPrice": 7500000.0,
            "discountedPrice": 6900000.0,
            "area": 850.0,
            "type": "Apartment",
            "bedrooms": 2,
            "availability": "Available",
            "image": "https://example.com/p.jpg"
        }"#;

        let property: Property = serde_json::from_str(json).unwrap();
        assert_eq!(property.id, "665f1c2e9a");
        assert_eq!(property.bedrooms, Some(2));
    }

    #[test]
    fn test_property_tolerates_missing_type_and_bedrooms() {
        let json = r#"{
            "id": "p-1",
            "title": "Old Record",
            "location": "Virar",
            "originalPrice": 4000000.0,
            "discountedPrice": 4000000.0,
            "area": 520.0,
            "availability": "ready",
            "image": ""
        }"#;

        let property: Property = serde_json::from_str(json).unwrap();
        assert!(property.property_type.is_none());
        assert!(property.bedrooms.is_none());
        assert_eq!(property.availability, Availability::Ready);
    }

    #[test]
    fn test_partial_update_omits_unset_fields() {
        let update = UpdatePropertyRequest {
            title: None,
            location: None,
            original_price: None,
            discounted_price: Some(6500000.0),
            area: None,
            property_type: None,
            bedrooms: None,
            availability: None,
            image: None,
        };

        let wire = serde_json::to_value(&update).unwrap();
        let object = wire.as_object().unwrap();
        assert_eq!(object.len(), 1);
        assert!(object.contains_key("discountedPrice"));
    }
}
