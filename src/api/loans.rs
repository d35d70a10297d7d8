//! EMI calculator endpoint.

use axum::extract::Query;
use serde::{Deserialize, Serialize};

use super::{success, ApiResult};
use crate::errors::AppError;
use crate::finance;

/// Query parameters for the EMI calculator.
#[derive(Debug, Deserialize)]
pub struct EmiParams {
    #[serde(default)]
    pub principal: Option<f64>,
    /// Annual interest rate in percent
    #[serde(default)]
    pub rate: Option<f64>,
    #[serde(default)]
    pub years: Option<f64>,
}

/// EMI calculation result.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmiResponse {
    /// Monthly installment in rupees, rounded to the nearest rupee
    pub emi: i64,
    pub months: u32,
    pub monthly_rate: f64,
}

/// GET /api/emi - Compute a loan installment.
pub async fn calculate_emi(Query(params): Query<EmiParams>) -> ApiResult<EmiResponse> {
    let (Some(principal), Some(rate), Some(years)) = (params.principal, params.rate, params.years)
    else {
        return Err(AppError::Validation(
            "principal, rate and years are required".to_string(),
        ));
    };

    let quote = finance::emi(principal, rate, years).ok_or_else(|| {
        AppError::Validation("principal, rate and years must be positive numbers".to_string())
    })?;

    success(EmiResponse {
        emi: quote.monthly_payment.round() as i64,
        months: quote.months,
        monthly_rate: quote.monthly_rate,
    })
}
