//! Broker API endpoints.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use super::{require_non_blank, success, ApiResult, ListingResponse, ListingResult};
use crate::errors::AppError;
use crate::listing::{self, BrokerAggregates, BrokerCriteria};
use crate::models::{phone_is_valid, Broker, RegisterBrokerRequest, UpdateBrokerRequest};
use crate::upstream::collections;
use crate::AppState;

/// Items per page on the public broker page.
const PUBLIC_PER_PAGE: usize = 3;
/// Items per page on the admin broker list.
const ADMIN_PER_PAGE: usize = 8;

/// Query parameters for broker listings.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrokerListingParams {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub page: Option<usize>,
    #[serde(default)]
    pub per_page: Option<usize>,
    #[serde(default)]
    pub refresh: bool,
}

/// GET /api/brokers - Verified brokers, newest first.
pub async fn list_brokers(
    State(state): State<AppState>,
    Query(params): Query<BrokerListingParams>,
) -> ListingResult<Broker, BrokerAggregates> {
    let loaded = state
        .store
        .brokers
        .load(&state.upstream, collections::BROKERS, params.refresh)
        .await;

    let criteria = BrokerCriteria {
        name: params.name,
        location: params.location,
        verified: Some(true),
    };

    // Registrations append, so newest-first means reverse upstream order.
    let matching: Vec<Broker> = loaded
        .items
        .iter()
        .rev()
        .filter(|b| criteria.matches(b))
        .cloned()
        .collect();

    let aggregates = BrokerAggregates::compute(&loaded.items);
    let page = listing::build_page(
        &matching,
        params.page.unwrap_or(1),
        params.per_page.unwrap_or(PUBLIC_PER_PAGE),
    );

    Ok(ListingResponse::new(page, aggregates, loaded.stale))
}

/// GET /api/admin/brokers - All brokers for the management page.
pub async fn admin_list_brokers(
    State(state): State<AppState>,
    Query(params): Query<BrokerListingParams>,
) -> ListingResult<Broker, BrokerAggregates> {
    let loaded = state
        .store
        .brokers
        .load(&state.upstream, collections::BROKERS, params.refresh)
        .await;

    let criteria = BrokerCriteria {
        name: params.name,
        location: params.location,
        verified: None,
    };

    let matching: Vec<Broker> = loaded
        .items
        .iter()
        .filter(|b| criteria.matches(b))
        .cloned()
        .collect();

    let aggregates = BrokerAggregates::compute(&loaded.items);
    let page = listing::build_page(
        &matching,
        params.page.unwrap_or(1),
        params.per_page.unwrap_or(ADMIN_PER_PAGE),
    );

    Ok(ListingResponse::new(page, aggregates, loaded.stale))
}

/// POST /api/brokers - Public broker registration.
///
/// The server-returned record is appended only after the upstream confirms
/// the create, so the cache never holds a registration the upstream rejected.
pub async fn register_broker(
    State(state): State<AppState>,
    Json(request): Json<RegisterBrokerRequest>,
) -> ApiResult<Broker> {
    require_non_blank(&[
        ("Name", &request.name),
        ("Phone", &request.phone),
        ("Email", &request.email),
        ("Location", &request.location),
    ])?;
    if !phone_is_valid(&request.phone) {
        return Err(AppError::Validation("Invalid phone number".to_string()));
    }

    let created: Broker = state.upstream.create(collections::BROKERS, &request).await?;
    state.store.brokers.append(created.clone()).await;

    success(created)
}

/// PUT /api/admin/brokers/:id - Update a broker (including the verified toggle).
pub async fn update_broker(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateBrokerRequest>,
) -> ApiResult<Broker> {
    if let Some(phone) = request.phone.as_deref() {
        if !phone_is_valid(phone) {
            return Err(AppError::Validation("Invalid phone number".to_string()));
        }
    }

    let updated: Broker = state
        .upstream
        .update(collections::BROKERS, &id, &request)
        .await?;
    state.store.brokers.upsert(updated.clone()).await;

    success(updated)
}

/// DELETE /api/admin/brokers/:id - Delete a broker.
pub async fn delete_broker(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<()> {
    state.upstream.delete(collections::BROKERS, &id).await?;
    state.store.brokers.remove(&id).await;

    success(())
}
