//! Property API endpoints.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use super::{require_non_blank, success, ApiResult, ListingResponse, ListingResult};
use crate::errors::AppError;
use crate::listing::{self, PropertyAggregates, PropertyCriteria};
use crate::models::{Availability, CreatePropertyRequest, Property, UpdatePropertyRequest};
use crate::upstream::collections;
use crate::AppState;

/// Items per page on the public properties page.
const PUBLIC_PER_PAGE: usize = 3;
/// The admin grid is effectively unpaginated; serve up to the listing cap.
const ADMIN_PER_PAGE: usize = listing::MAX_PER_PAGE;
/// City rail length on the public page.
const FEATURED_LIMIT: usize = 3;

/// Query parameters for the public property search.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyListingParams {
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub title: String,
    #[serde(rename = "type", default)]
    pub property_type: String,
    #[serde(default)]
    pub bedrooms: Option<u32>,
    /// Upper price bound in lakhs
    #[serde(default)]
    pub max: Option<f64>,
    #[serde(default)]
    pub availability: Option<String>,
    #[serde(default)]
    pub page: Option<usize>,
    #[serde(default)]
    pub per_page: Option<usize>,
    #[serde(default)]
    pub refresh: bool,
}

fn parse_availability(value: Option<&str>) -> Result<Option<Availability>, AppError> {
    match value {
        None | Some("") => Ok(None),
        Some(v) => Availability::from_str(v)
            .map(Some)
            .ok_or_else(|| AppError::Validation(format!("Unknown availability: {}", v))),
    }
}

/// GET /api/properties - Public property search with filters and pagination.
pub async fn list_properties(
    State(state): State<AppState>,
    Query(params): Query<PropertyListingParams>,
) -> ListingResult<Property, PropertyAggregates> {
    let availability = parse_availability(params.availability.as_deref())?;

    let loaded = state
        .store
        .properties
        .load(&state.upstream, collections::PROPERTIES, params.refresh)
        .await;

    let criteria = PropertyCriteria {
        city: params.city,
        title: params.title,
        property_type: params.property_type,
        bedrooms: params.bedrooms,
        max_price_lakhs: params.max,
        availability,
    };

    let matching: Vec<Property> = loaded
        .items
        .iter()
        .filter(|p| criteria.matches(p))
        .cloned()
        .collect();

    let aggregates = PropertyAggregates::compute(&loaded.items);
    let page = listing::build_page(
        &matching,
        params.page.unwrap_or(1),
        params.per_page.unwrap_or(PUBLIC_PER_PAGE),
    );

    Ok(ListingResponse::new(page, aggregates, loaded.stale))
}

/// Query parameters for the per-city rails.
#[derive(Debug, Deserialize)]
pub struct FeaturedParams {
    pub city: String,
    #[serde(default)]
    pub limit: Option<usize>,
}

/// GET /api/properties/featured - First few properties in a city.
pub async fn featured_properties(
    State(state): State<AppState>,
    Query(params): Query<FeaturedParams>,
) -> ApiResult<Vec<Property>> {
    let loaded = state
        .store
        .properties
        .load(&state.upstream, collections::PROPERTIES, false)
        .await;

    let limit = params.limit.unwrap_or(FEATURED_LIMIT).clamp(1, listing::MAX_PER_PAGE);
    let items: Vec<Property> = loaded
        .items
        .iter()
        .filter(|p| p.location.eq_ignore_ascii_case(&params.city))
        .take(limit)
        .cloned()
        .collect();

    success(items)
}

/// Query parameters for the admin property grid.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminPropertyParams {
    /// Title substring search
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub page: Option<usize>,
    #[serde(default)]
    pub per_page: Option<usize>,
    #[serde(default)]
    pub refresh: bool,
}

/// GET /api/admin/properties - Admin grid with title search and dashboard cards.
pub async fn admin_list_properties(
    State(state): State<AppState>,
    Query(params): Query<AdminPropertyParams>,
) -> ListingResult<Property, PropertyAggregates> {
    let loaded = state
        .store
        .properties
        .load(&state.upstream, collections::PROPERTIES, params.refresh)
        .await;

    let criteria = PropertyCriteria {
        title: params.search,
        ..Default::default()
    };

    let matching: Vec<Property> = loaded
        .items
        .iter()
        .filter(|p| criteria.matches(p))
        .cloned()
        .collect();

    let aggregates = PropertyAggregates::compute(&loaded.items);
    let page = listing::build_page(
        &matching,
        params.page.unwrap_or(1),
        params.per_page.unwrap_or(ADMIN_PER_PAGE),
    );

    Ok(ListingResponse::new(page, aggregates, loaded.stale))
}

fn validate_prices(fields: &[(&str, f64)]) -> Result<(), AppError> {
    for (name, value) in fields {
        if !value.is_finite() || *value < 0.0 {
            return Err(AppError::Validation(format!(
                "{} must be a non-negative number",
                name
            )));
        }
    }
    Ok(())
}

/// POST /api/admin/properties - Create a new property.
pub async fn create_property(
    State(state): State<AppState>,
    Json(request): Json<CreatePropertyRequest>,
) -> ApiResult<Property> {
    require_non_blank(&[
        ("Title", &request.title),
        ("Location", &request.location),
        ("Image", &request.image),
    ])?;
    validate_prices(&[
        ("originalPrice", request.original_price),
        ("discountedPrice", request.discounted_price),
        ("area", request.area),
    ])?;

    let created: Property = state
        .upstream
        .create(collections::PROPERTIES, &request)
        .await?;
    state.store.properties.append(created.clone()).await;

    success(created)
}

/// PUT /api/admin/properties/:id - Update a property.
pub async fn update_property(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdatePropertyRequest>,
) -> ApiResult<Property> {
    let mut checks = Vec::new();
    if let Some(p) = request.original_price {
        checks.push(("originalPrice", p));
    }
    if let Some(p) = request.discounted_price {
        checks.push(("discountedPrice", p));
    }
    if let Some(a) = request.area {
        checks.push(("area", a));
    }
    validate_prices(&checks)?;

    let updated: Property = state
        .upstream
        .update(collections::PROPERTIES, &id, &request)
        .await?;
    state.store.properties.upsert(updated.clone()).await;

    success(updated)
}

/// DELETE /api/admin/properties/:id - Delete a property.
pub async fn delete_property(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<()> {
    state.upstream.delete(collections::PROPERTIES, &id).await?;
    state.store.properties.remove(&id).await;

    success(())
}
