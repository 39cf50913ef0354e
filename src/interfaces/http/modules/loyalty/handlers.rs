//! Loyalty points handler

use axum::extract::Query;
use axum::Json;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::domain::{pricing, DomainError};
use crate::interfaces::http::common::ErrorResponse;
use crate::shared::validations::parse_numeric_field;

use super::dto::LoyaltyPointsResponse;

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct LoyaltyPointsParams {
    /// Purchase amount the points are earned on
    pub purchase_amount: Option<String>,
}

/// Loyalty points earned for a purchase amount.
#[utoipa::path(
    get,
    path = "/loyalty-points",
    tag = "Loyalty",
    params(LoyaltyPointsParams),
    responses(
        (status = 200, description = "Points earned", body = LoyaltyPointsResponse),
        (status = 400, description = "Missing or non-numeric purchase amount", body = ErrorResponse)
    )
)]
pub async fn loyalty_points(
    Query(params): Query<LoyaltyPointsParams>,
) -> Result<Json<LoyaltyPointsResponse>, DomainError> {
    let amount = parse_numeric_field(params.purchase_amount.as_deref(), "purchaseAmount")?;

    Ok(Json(LoyaltyPointsResponse {
        loyalty_points: pricing::loyalty_points(amount),
    }))
}
