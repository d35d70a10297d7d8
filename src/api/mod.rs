//! REST API module.
//!
//! Contains all API routes and handlers following the frontend contract.

mod brokers;
mod contact;
mod loans;
mod projects;
mod properties;
mod requirements;

pub use brokers::*;
pub use contact::*;
pub use loans::*;
pub use projects::*;
pub use properties::*;
pub use requirements::*;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::errors::AppError;
use crate::listing::ListingPage;

/// Success response envelope.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Response type that can be either success or error.
pub type ApiResult<T> = Result<ApiResponse<T>, AppError>;

/// Create a successful API response.
pub fn success<T: Serialize>(data: T) -> ApiResult<T> {
    Ok(ApiResponse::new(data))
}

/// Listing response envelope: one page of a filtered collection plus the
/// aggregates computed over the unfiltered collection.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingResponse<T: Serialize, A: Serialize> {
    pub success: bool,
    pub data: Vec<T>,
    pub page: usize,
    pub total_pages: usize,
    pub total_matching: usize,
    pub aggregates: A,
    /// True when the upstream fetch failed and this is a last-known-good view.
    pub stale: bool,
}

impl<T: Serialize, A: Serialize> ListingResponse<T, A> {
    pub fn new(page: ListingPage<T>, aggregates: A, stale: bool) -> Self {
        Self {
            success: true,
            data: page.items,
            page: page.page,
            total_pages: page.total_pages,
            total_matching: page.total_matching,
            aggregates,
            stale,
        }
    }
}

impl<T: Serialize, A: Serialize> IntoResponse for ListingResponse<T, A> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Listing response or error.
pub type ListingResult<T, A> = Result<ListingResponse<T, A>, AppError>;

/// Reject blank required fields with a uniform validation message.
pub(crate) fn require_non_blank(fields: &[(&str, &str)]) -> Result<(), AppError> {
    for (name, value) in fields {
        if value.trim().is_empty() {
            return Err(AppError::Validation(format!("{} is required", name)));
        }
    }
    Ok(())
}
