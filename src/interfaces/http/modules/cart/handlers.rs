//! Cart pricing handlers
//!
//! Numeric query parameters arrive as raw strings and go through the
//! shared lenient validator, so a missing field and a malformed field
//! produce the same field-naming error.

use axum::extract::Query;
use axum::Json;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::domain::{pricing, DomainError};
use crate::interfaces::http::common::ErrorResponse;
use crate::shared::validations::{parse_membership_flag, parse_numeric_field};

use super::dto::{CartTotalResponse, DiscountResponse, TaxResponse};

// ── Query params ───────────────────────────────────────────────

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct CartTotalParams {
    /// Price of the item being added
    pub new_item_price: Option<String>,
    /// Cart total before the new item
    pub cart_total: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct DiscountParams {
    /// Cart total before the discount
    pub cart_total: Option<String>,
    /// Membership flag; only the literal `true` enables the discount
    pub is_member: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct TaxParams {
    /// Cart total to tax
    pub cart_total: Option<String>,
}

// ── Handlers ───────────────────────────────────────────────────

/// Running cart total.
#[utoipa::path(
    get,
    path = "/cart-total",
    tag = "Cart",
    params(CartTotalParams),
    responses(
        (status = 200, description = "Sum of cart total and item price", body = CartTotalResponse),
        (status = 400, description = "Missing or non-numeric field", body = ErrorResponse)
    )
)]
pub async fn cart_total(
    Query(params): Query<CartTotalParams>,
) -> Result<Json<CartTotalResponse>, DomainError> {
    let new_item_price = parse_numeric_field(params.new_item_price.as_deref(), "newItemPrice")?;
    let current_total = parse_numeric_field(params.cart_total.as_deref(), "cartTotal")?;

    Ok(Json(CartTotalResponse {
        total: pricing::cart_total(current_total, new_item_price),
    }))
}

/// Price after the membership discount.
#[utoipa::path(
    get,
    path = "/membership-discount",
    tag = "Cart",
    params(DiscountParams),
    responses(
        (status = 200, description = "Final price", body = DiscountResponse),
        (status = 400, description = "Missing or non-numeric cart total", body = ErrorResponse)
    )
)]
pub async fn membership_discount(
    Query(params): Query<DiscountParams>,
) -> Result<Json<DiscountResponse>, DomainError> {
    let total = parse_numeric_field(params.cart_total.as_deref(), "cartTotal")?;
    let is_member = parse_membership_flag(params.is_member.as_deref());

    Ok(Json(DiscountResponse {
        final_price: pricing::discounted_price(total, is_member),
    }))
}

/// Sales tax on the cart total.
#[utoipa::path(
    get,
    path = "/calculate-tax",
    tag = "Cart",
    params(TaxParams),
    responses(
        (status = 200, description = "Tax owed", body = TaxResponse),
        (status = 400, description = "Missing or non-numeric cart total", body = ErrorResponse)
    )
)]
pub async fn calculate_tax(
    Query(params): Query<TaxParams>,
) -> Result<Json<TaxResponse>, DomainError> {
    let total = parse_numeric_field(params.cart_total.as_deref(), "cartTotal")?;

    Ok(Json(TaxResponse {
        tax: pricing::sales_tax(total),
    }))
}
