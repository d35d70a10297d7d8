//! Redevelopment and commercial project API endpoints.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use super::{require_non_blank, success, ApiResult, ListingResponse, ListingResult};
use crate::errors::AppError;
use crate::listing::{
    self, CommercialAggregates, CommercialCriteria, RedevelopmentAggregates,
    RedevelopmentCriteria,
};
use crate::models::{
    normalize_amenities, CommercialCompletion, CommercialProject, CreateCommercialRequest,
    CreateRedevelopmentRequest, ProjectStatus, RedevelopmentProject, UpdateCommercialRequest,
    UpdateRedevelopmentRequest,
};
use crate::upstream::collections;
use crate::AppState;

/// Items per page on the redevelopment tab.
const REDEVELOPMENT_PER_PAGE: usize = 2;
/// Items per page on the commercial tab.
const COMMERCIAL_PER_PAGE: usize = 3;

/// Query parameters for the redevelopment listing.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RedevelopmentParams {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub page: Option<usize>,
    #[serde(default)]
    pub per_page: Option<usize>,
    #[serde(default)]
    pub refresh: bool,
}

/// GET /api/redevelopment - Redevelopment projects with status breakdown.
pub async fn list_redevelopment(
    State(state): State<AppState>,
    Query(params): Query<RedevelopmentParams>,
) -> ListingResult<RedevelopmentProject, RedevelopmentAggregates> {
    let status = match params.status.as_deref() {
        None | Some("") => None,
        Some(value) => Some(
            ProjectStatus::from_str(value)
                .ok_or_else(|| AppError::Validation(format!("Unknown status: {}", value)))?,
        ),
    };

    let loaded = state
        .store
        .redevelopment
        .load(&state.upstream, collections::REDEVELOPMENT, params.refresh)
        .await;

    let criteria = RedevelopmentCriteria { status };
    let matching: Vec<RedevelopmentProject> = loaded
        .items
        .iter()
        .filter(|p| criteria.matches(p))
        .cloned()
        .collect();

    let aggregates = RedevelopmentAggregates::compute(&loaded.items);
    let page = listing::build_page(
        &matching,
        params.page.unwrap_or(1),
        params.per_page.unwrap_or(REDEVELOPMENT_PER_PAGE),
    );

    Ok(ListingResponse::new(page, aggregates, loaded.stale))
}

/// Query parameters for the commercial listing.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommercialParams {
    #[serde(default)]
    pub completion: Option<String>,
    #[serde(default)]
    pub page: Option<usize>,
    #[serde(default)]
    pub per_page: Option<usize>,
    #[serde(default)]
    pub refresh: bool,
}

/// GET /api/commercial - Commercial projects with completion breakdown.
pub async fn list_commercial(
    State(state): State<AppState>,
    Query(params): Query<CommercialParams>,
) -> ListingResult<CommercialProject, CommercialAggregates> {
    let completion = match params.completion.as_deref() {
        None | Some("") => None,
        Some(value) => Some(
            CommercialCompletion::from_str(value)
                .ok_or_else(|| AppError::Validation(format!("Unknown completion: {}", value)))?,
        ),
    };

    let loaded = state
        .store
        .commercial
        .load(&state.upstream, collections::COMMERCIAL, params.refresh)
        .await;

    let criteria = CommercialCriteria { completion };
    let matching: Vec<CommercialProject> = loaded
        .items
        .iter()
        .filter(|p| criteria.matches(p))
        .cloned()
        .collect();

    let aggregates = CommercialAggregates::compute(&loaded.items);
    let page = listing::build_page(
        &matching,
        params.page.unwrap_or(1),
        params.per_page.unwrap_or(COMMERCIAL_PER_PAGE),
    );

    Ok(ListingResponse::new(page, aggregates, loaded.stale))
}

/// POST /api/admin/redevelopment - Create a redevelopment project.
pub async fn create_redevelopment(
    State(state): State<AppState>,
    Json(mut request): Json<CreateRedevelopmentRequest>,
) -> ApiResult<RedevelopmentProject> {
    require_non_blank(&[("Name", &request.name), ("Timeline", &request.timeline)])?;
    request.amenities = normalize_amenities(&request.amenities);

    let created: RedevelopmentProject = state
        .upstream
        .create(collections::REDEVELOPMENT, &request)
        .await?;
    state.store.redevelopment.append(created.clone()).await;

    success(created)
}

/// PUT /api/admin/redevelopment/:id - Update a redevelopment project.
pub async fn update_redevelopment(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(mut request): Json<UpdateRedevelopmentRequest>,
) -> ApiResult<RedevelopmentProject> {
    if let Some(amenities) = request.amenities.as_deref() {
        request.amenities = Some(normalize_amenities(amenities));
    }

    let updated: RedevelopmentProject = state
        .upstream
        .update(collections::REDEVELOPMENT, &id, &request)
        .await?;
    state.store.redevelopment.upsert(updated.clone()).await;

    success(updated)
}

/// DELETE /api/admin/redevelopment/:id - Delete a redevelopment project.
pub async fn delete_redevelopment(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<()> {
    state
        .upstream
        .delete(collections::REDEVELOPMENT, &id)
        .await?;
    state.store.redevelopment.remove(&id).await;

    success(())
}

/// POST /api/admin/commercial - Create a commercial project.
pub async fn create_commercial(
    State(state): State<AppState>,
    Json(request): Json<CreateCommercialRequest>,
) -> ApiResult<CommercialProject> {
    require_non_blank(&[("Name", &request.name), ("Location", &request.location)])?;

    let created: CommercialProject = state
        .upstream
        .create(collections::COMMERCIAL, &request)
        .await?;
    state.store.commercial.append(created.clone()).await;

    success(created)
}

/// PUT /api/admin/commercial/:id - Update a commercial project.
pub async fn update_commercial(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateCommercialRequest>,
) -> ApiResult<CommercialProject> {
    let updated: CommercialProject = state
        .upstream
        .update(collections::COMMERCIAL, &id, &request)
        .await?;
    state.store.commercial.upsert(updated.clone()).await;

    success(updated)
}

/// DELETE /api/admin/commercial/:id - Delete a commercial project.
pub async fn delete_commercial(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<()> {
    state.upstream.delete(collections::COMMERCIAL, &id).await?;
    state.store.commercial.remove(&id).await;

    success(())
}
