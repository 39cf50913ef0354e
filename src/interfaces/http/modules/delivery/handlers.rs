//! Delivery estimate handler

use axum::extract::Query;
use axum::Json;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::domain::{pricing, DomainError, ShippingMethod};
use crate::interfaces::http::common::ErrorResponse;
use crate::shared::validations::parse_numeric_field;

use super::dto::DeliveryEstimateResponse;

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct DeliveryParams {
    /// `standard` (50 distance units/day) or `express` (100/day)
    pub shipping_method: Option<String>,
    /// Distance to the destination
    pub distance: Option<String>,
}

/// Estimated delivery days for a shipping method and distance.
///
/// `distance` is validated before `shippingMethod`, so when both are
/// invalid the numeric error is the one reported.
#[utoipa::path(
    get,
    path = "/estimate-delivery",
    tag = "Delivery",
    params(DeliveryParams),
    responses(
        (status = 200, description = "Delivery estimate", body = DeliveryEstimateResponse),
        (status = 400, description = "Invalid distance or shipping method", body = ErrorResponse)
    )
)]
pub async fn estimate_delivery(
    Query(params): Query<DeliveryParams>,
) -> Result<Json<DeliveryEstimateResponse>, DomainError> {
    let distance = parse_numeric_field(params.distance.as_deref(), "distance")?;
    let method: ShippingMethod = params.shipping_method.as_deref().unwrap_or("").parse()?;

    Ok(Json(DeliveryEstimateResponse {
        days: pricing::delivery_days(method, distance),
    }))
}
