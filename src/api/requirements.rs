//! Property requirement API endpoints.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use super::{require_non_blank, success, ApiResult};
use crate::models::{CreateRequirementRequest, PropertyRequirement, UpdateRequirementRequest};
use crate::upstream::collections;
use crate::AppState;

/// Query parameters for the requirements list.
#[derive(Debug, Deserialize)]
pub struct RequirementParams {
    /// Return only the newest N entries (the broker page shows 3).
    #[serde(default)]
    pub latest: Option<usize>,
    #[serde(default)]
    pub refresh: bool,
}

/// GET /api/property-requirements - Requirements, newest first.
pub async fn list_requirements(
    State(state): State<AppState>,
    Query(params): Query<RequirementParams>,
) -> ApiResult<Vec<PropertyRequirement>> {
    let loaded = state
        .store
        .requirements
        .load(
            &state.upstream,
            collections::PROPERTY_REQUIREMENTS,
            params.refresh,
        )
        .await;

    let mut items: Vec<PropertyRequirement> = loaded.items.iter().rev().cloned().collect();
    if let Some(latest) = params.latest {
        items.truncate(latest);
    }

    success(items)
}

/// POST /api/admin/property-requirements - Create a requirement.
pub async fn create_requirement(
    State(state): State<AppState>,
    Json(request): Json<CreateRequirementRequest>,
) -> ApiResult<PropertyRequirement> {
    require_non_blank(&[
        ("Title", &request.title),
        ("Details", &request.details),
        ("Location", &request.location),
    ])?;

    let created: PropertyRequirement = state
        .upstream
        .create(collections::PROPERTY_REQUIREMENTS, &request)
        .await?;
    state.store.requirements.append(created.clone()).await;

    success(created)
}

/// PUT /api/admin/property-requirements/:id - Update a requirement.
pub async fn update_requirement(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateRequirementRequest>,
) -> ApiResult<PropertyRequirement> {
    let updated: PropertyRequirement = state
        .upstream
        .update(collections::PROPERTY_REQUIREMENTS, &id, &request)
        .await?;
    state.store.requirements.upsert(updated.clone()).await;

    success(updated)
}

/// DELETE /api/admin/property-requirements/:id - Delete a requirement.
pub async fn delete_requirement(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<()> {
    state
        .upstream
        .delete(collections::PROPERTY_REQUIREMENTS, &id)
        .await?;
    state.store.requirements.remove(&id).await;

    success(())
}
