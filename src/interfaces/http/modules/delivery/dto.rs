//! Delivery estimate response body

use serde::Serialize;
use utoipa::ToSchema;

/// Estimated delivery time.
#[derive(Debug, Serialize, ToSchema)]
pub struct DeliveryEstimateResponse {
    /// Whole delivery days, rounded up
    pub days: i64,
}
