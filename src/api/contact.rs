//! Contact/query relay endpoint.

use axum::{extract::State, Json};

use super::{require_non_blank, success, ApiResult};
use crate::errors::AppError;
use crate::models::{phone_is_valid, ContactRequest, EmailPayload};
use crate::AppState;

/// POST /api/contact - Relay a form submission to the upstream mailer.
///
/// Each originating form has its own tagged variant; the upstream's fixed
/// wire shape is produced only here at the boundary.
pub async fn submit_contact(
    State(state): State<AppState>,
    Json(request): Json<ContactRequest>,
) -> ApiResult<()> {
    require_non_blank(&request.required_fields())?;

    if let ContactRequest::Hero { phone, .. } | ContactRequest::LegalCallback { phone, .. } =
        &request
    {
        if !phone_is_valid(phone) {
            return Err(AppError::Validation("Invalid phone number".to_string()));
        }
    }

    let payload = EmailPayload::from(request);
    state.upstream.send_email(&payload).await?;

    success(())
}
