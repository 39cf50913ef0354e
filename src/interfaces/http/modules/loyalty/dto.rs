//! Loyalty points response body

use serde::Serialize;
use utoipa::ToSchema;

/// Loyalty points earned for a purchase.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoyaltyPointsResponse {
    /// `purchaseAmount * 2`
    pub loyalty_points: f64,
}
