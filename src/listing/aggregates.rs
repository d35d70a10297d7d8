//! Derived aggregates for the dashboard cards.
//!
//! Computed over the full unfiltered collection on every request; O(N) at a
//! scale where N is a few hundred records.

use serde::Serialize;

use crate::models::{
    Availability, Broker, CommercialCompletion, CommercialProject, ProjectStatus, Property,
    RedevelopmentProject,
};

/// Count the items satisfying `pred`.
pub fn count_where<T>(items: &[T], pred: impl Fn(&T) -> bool) -> usize {
    items.iter().filter(|item| pred(item)).count()
}

/// Totals shown on the property management cards.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PropertyAggregates {
    pub total: usize,
    pub available: usize,
    pub sold: usize,
}

impl PropertyAggregates {
    pub fn compute(properties: &[Property]) -> Self {
        Self {
            total: properties.len(),
            available: count_where(properties, |p| p.availability == Availability::Available),
            sold: count_where(properties, |p| p.availability == Availability::Sold),
        }
    }
}

/// Totals for the broker management page.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BrokerAggregates {
    pub total: usize,
    pub verified: usize,
}

impl BrokerAggregates {
    pub fn compute(brokers: &[Broker]) -> Self {
        Self {
            total: brokers.len(),
            verified: count_where(brokers, |b| b.verified),
        }
    }
}

/// Status breakdown of redevelopment projects.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RedevelopmentAggregates {
    pub total: usize,
    pub ongoing: usize,
    pub completed: usize,
    pub upcoming: usize,
}

impl RedevelopmentAggregates {
    pub fn compute(projects: &[RedevelopmentProject]) -> Self {
        Self {
            total: projects.len(),
            ongoing: count_where(projects, |p| p.status == ProjectStatus::Ongoing),
            completed: count_where(projects, |p| p.status == ProjectStatus::Completed),
            upcoming: count_where(projects, |p| p.status == ProjectStatus::Upcoming),
        }
    }
}

/// Completion breakdown of commercial projects.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CommercialAggregates {
    pub total: usize,
    pub ready_to_move: usize,
    pub under_construction: usize,
    pub pre_launch: usize,
}

impl CommercialAggregates {
    pub fn compute(projects: &[CommercialProject]) -> Self {
        Self {
            total: projects.len(),
            ready_to_move: count_where(projects, |p| {
                p.completion == CommercialCompletion::ReadyToMove
            }),
            under_construction: count_where(projects, |p| {
                p.completion == CommercialCompletion::UnderConstruction
            }),
            pre_launch: count_where(projects, |p| {
                p.completion == CommercialCompletion::PreLaunch
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn property(availability: Availability) -> Property {
        Property {
            id: "p".to_string(),
            title: String::new(),
            location: String::new(),
            original_price: 0.0,
            discounted_price: 0.0,
            area: 0.0,
            property_type: None,
            bedrooms: None,
            availability,
            image: String::new(),
        }
    }

    #[test]
    fn test_property_aggregates() {
        let properties = vec![
            property(Availability::Available),
            property(Availability::Available),
            property(Availability::Sold),
            property(Availability::Pending),
            property(Availability::Ready),
        ];

        let aggregates = PropertyAggregates::compute(&properties);
        assert_eq!(
            aggregates,
            PropertyAggregates {
                total: 5,
                available: 2,
                sold: 1,
            }
        );
    }

    #[test]
    fn test_empty_collection_aggregates_to_zero() {
        let aggregates = PropertyAggregates::compute(&[]);
        assert_eq!(aggregates.total, 0);
        assert_eq!(aggregates.available, 0);
        assert_eq!(aggregates.sold, 0);
    }
}
