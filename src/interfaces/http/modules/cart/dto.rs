//! Cart pricing response bodies

use serde::Serialize;
use utoipa::ToSchema;

/// Cart total after adding the new item.
#[derive(Debug, Serialize, ToSchema)]
pub struct CartTotalResponse {
    /// `cartTotal + newItemPrice`
    pub total: f64,
}

/// Price after the membership discount.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DiscountResponse {
    /// Full price for non-members, 10% off for members
    pub final_price: f64,
}

/// Sales tax owed on the cart.
#[derive(Debug, Serialize, ToSchema)]
pub struct TaxResponse {
    /// `cartTotal * 0.05`
    pub tax: f64,
}
