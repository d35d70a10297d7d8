//! Filter predicate evaluation.
//!
//! Three criterion shapes cover every filter on the site: case-insensitive
//! substring for free text, case-insensitive equality for categories, and an
//! upper price bound entered in lakhs. An empty criterion matches everything;
//! a record missing the filtered field never matches a non-empty criterion.
//! Criteria combine with AND.

use crate::models::{
    Availability, Broker, CommercialCompletion, CommercialProject, Property, ProjectStatus,
    RedevelopmentProject,
};

/// Rupees per lakh, the display unit of the max-price filter.
pub const RUPEES_PER_LAKH: f64 = 100_000.0;

/// Case-insensitive substring match. Empty criterion matches everything.
pub fn text_matches(criterion: &str, value: Option<&str>) -> bool {
    if criterion.is_empty() {
        return true;
    }
    match value {
        Some(v) => v.to_lowercase().contains(&criterion.to_lowercase()),
        None => false,
    }
}

/// Case-insensitive exact match. Empty criterion matches everything.
pub fn category_matches(criterion: &str, value: Option<&str>) -> bool {
    if criterion.is_empty() {
        return true;
    }
    match value {
        Some(v) => v.eq_ignore_ascii_case(criterion),
        None => false,
    }
}

/// Exact equality for non-string categories (e.g. bedroom count).
pub fn eq_matches<T: PartialEq>(criterion: Option<T>, value: Option<T>) -> bool {
    match criterion {
        None => true,
        Some(c) => value.map(|v| v == c).unwrap_or(false),
    }
}

/// Upper bound in lakhs against a rupee value. `None` bound matches everything.
pub fn within_max_lakhs(bound_lakhs: Option<f64>, value: Option<f64>) -> bool {
    match bound_lakhs {
        None => true,
        Some(bound) => value.map(|v| v <= bound * RUPEES_PER_LAKH).unwrap_or(false),
    }
}

/// Filter criteria for property listings.
///
/// Covers both the public search (city/type/bedrooms/max) and the admin
/// title search with one set; unused criteria stay empty.
#[derive(Debug, Clone, Default)]
pub struct PropertyCriteria {
    pub city: String,
    pub title: String,
    pub property_type: String,
    pub bedrooms: Option<u32>,
    pub max_price_lakhs: Option<f64>,
    pub availability: Option<Availability>,
}

impl PropertyCriteria {
    pub fn matches(&self, property: &Property) -> bool {
        text_matches(&self.city, Some(property.location.as_str()))
            && text_matches(&self.title, Some(property.title.as_str()))
            && category_matches(&self.property_type, property.property_type.as_deref())
            && eq_matches(self.bedrooms, property.bedrooms)
            && within_max_lakhs(self.max_price_lakhs, Some(property.discounted_price))
            && eq_matches(self.availability, Some(property.availability))
    }
}

/// Filter criteria for broker listings.
#[derive(Debug, Clone, Default)]
pub struct BrokerCriteria {
    pub name: String,
    pub location: String,
    /// `Some(true)` on the public page; admins see everyone.
    pub verified: Option<bool>,
}

impl BrokerCriteria {
    pub fn matches(&self, broker: &Broker) -> bool {
        text_matches(&self.name, Some(broker.name.as_str()))
            && text_matches(&self.location, Some(broker.location.as_str()))
            && eq_matches(self.verified, Some(broker.verified))
    }
}

/// Filter criteria for redevelopment projects.
#[derive(Debug, Clone, Default)]
pub struct RedevelopmentCriteria {
    pub status: Option<ProjectStatus>,
}

impl RedevelopmentCriteria {
    pub fn matches(&self, project: &RedevelopmentProject) -> bool {
        eq_matches(self.status, Some(project.status))
    }
}

/// Filter criteria for commercial projects.
#[derive(Debug, Clone, Default)]
pub struct CommercialCriteria {
    pub completion: Option<CommercialCompletion>,
}

impl CommercialCriteria {
    pub fn matches(&self, project: &CommercialProject) -> bool {
        eq_matches(self.completion, Some(project.completion))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn property(
        title: &str,
        location: &str,
        property_type: Option<&str>,
        bedrooms: Option<u32>,
        discounted_price: f64,
    ) -> Property {
        Property {
            id: "p-test".to_string(),
            title: title.to_string(),
            location: location.to_string(),
            original_price: discounted_price,
            discounted_price,
            area: 800.0,
            property_type: property_type.map(str::to_string),
            bedrooms,
            availability: Availability::Available,
            image: String::new(),
        }
    }

    #[test]
    fn test_text_matches_is_case_insensitive_substring() {
        assert!(text_matches("mum", Some("Navi Mumbai")));
        assert!(text_matches("MUMBAI", Some("mumbai")));
        assert!(!text_matches("delhi", Some("Mumbai")));
        assert!(text_matches("", Some("anything")));
        assert!(text_matches("", None));
        assert!(!text_matches("x", None));
    }

    #[test]
    fn test_category_matches_exact_only() {
        assert!(category_matches("apartment", Some("Apartment")));
        assert!(!category_matches("apart", Some("Apartment")));
        assert!(category_matches("", None));
        assert!(!category_matches("Villa", None));
    }

    #[test]
    fn test_all_empty_criteria_match_everything() {
        let criteria = PropertyCriteria::default();
        assert!(criteria.matches(&property("Any", "Anywhere", None, None, 1.0)));
    }

    #[test]
    fn test_lakh_conversion_boundary() {
        // max 50 L = exactly 5,000,000 rupees; 6,000,000 must not match.
        let criteria = PropertyCriteria {
            property_type: "Apartment".to_string(),
            bedrooms: Some(2),
            max_price_lakhs: Some(50.0),
            ..Default::default()
        };

        let too_expensive = property("A", "Mumbai", Some("Apartment"), Some(2), 6_000_000.0);
        assert!(!criteria.matches(&too_expensive));

        let at_bound = property("B", "Mumbai", Some("Apartment"), Some(2), 5_000_000.0);
        assert!(criteria.matches(&at_bound));
    }

    #[test]
    fn test_missing_field_fails_nonempty_criterion() {
        let criteria = PropertyCriteria {
            property_type: "Apartment".to_string(),
            ..Default::default()
        };
        assert!(!criteria.matches(&property("A", "Mumbai", None, Some(2), 1.0)));

        let bedroom_criteria = PropertyCriteria {
            bedrooms: Some(2),
            ..Default::default()
        };
        assert!(!bedroom_criteria.matches(&property("A", "Mumbai", Some("Apartment"), None, 1.0)));
    }

    #[test]
    fn test_criteria_combine_with_and() {
        let criteria = PropertyCriteria {
            city: "mumbai".to_string(),
            property_type: "Apartment".to_string(),
            ..Default::default()
        };

        assert!(criteria.matches(&property("A", "Mumbai", Some("Apartment"), None, 1.0)));
        assert!(!criteria.matches(&property("A", "Mumbai", Some("Villa"), None, 1.0)));
        assert!(!criteria.matches(&property("A", "Pune", Some("Apartment"), None, 1.0)));
    }

    #[test]
    fn test_broker_verified_filter() {
        let broker = Broker {
            id: "b-1".to_string(),
            name: "Asha".to_string(),
            email: "a@x.com".to_string(),
            phone: "9876543210".to_string(),
            location: "Mumbai".to_string(),
            verified: false,
        };

        let public = BrokerCriteria {
            verified: Some(true),
            ..Default::default()
        };
        assert!(!public.matches(&broker));

        let admin = BrokerCriteria::default();
        assert!(admin.matches(&broker));
    }
}
