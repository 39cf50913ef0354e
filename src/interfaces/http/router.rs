//! API Router with Swagger UI

use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::common::ErrorResponse;
use super::modules::{cart, delivery, health, loyalty};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::health_check,
        // Cart
        cart::cart_total,
        cart::membership_discount,
        cart::calculate_tax,
        // Delivery
        delivery::estimate_delivery,
        // Loyalty
        loyalty::loyalty_points,
    ),
    components(
        schemas(
            ErrorResponse,
            health::HealthResponse,
            cart::CartTotalResponse,
            cart::DiscountResponse,
            cart::TaxResponse,
            delivery::DeliveryEstimateResponse,
            loyalty::LoyaltyPointsResponse,
        )
    ),
    tags(
        (name = "Health", description = "Server health check endpoints"),
        (name = "Cart", description = "Cart total, membership discount and sales tax calculations"),
        (name = "Delivery", description = "Delivery time estimation"),
        (name = "Loyalty", description = "Loyalty points calculation"),
    ),
    info(
        title = "Cart Calculation Service API",
        version = "1.0.0",
        description = "Stateless arithmetic calculations for an e-commerce cart",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes
pub fn create_api_router() -> Router {
    // CORS configuration: the calculations are public, any origin may call
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    Router::new()
        // Swagger UI
        .merge(swagger_routes)
        // Health
        .route("/health", get(health::health_check))
        // Calculations
        .route("/cart-total", get(cart::cart_total))
        .route("/membership-discount", get(cart::membership_discount))
        .route("/calculate-tax", get(cart::calculate_tax))
        .route("/estimate-delivery", get(delivery::estimate_delivery))
        .route("/loyalty-points", get(loyalty::loyalty_points))
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::Value;

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        use tower::Service;

        let mut svc = create_api_router().into_service();
        let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let resp = svc.call(req).await.unwrap();

        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = serde_json::from_slice(&bytes).unwrap();
        (status, body)
    }

    #[tokio::test]
    async fn health_returns_ok() {
        let (status, body) = get_json("/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn cart_total_adds_both_fields() {
        let (status, body) = get_json("/cart-total?newItemPrice=10&cartTotal=40").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"].as_f64(), Some(50.0));
    }

    #[tokio::test]
    async fn cart_total_rejects_non_numeric_price() {
        let (status, body) = get_json("/cart-total?newItemPrice=abc&cartTotal=40").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid newItemPrice: must be a number");
    }

    #[tokio::test]
    async fn cart_total_rejects_missing_field() {
        let (status, body) = get_json("/cart-total?newItemPrice=10").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid cartTotal: must be a number");
    }

    // Lenient numeric parsing: the numeric prefix of "12abc" is used.
    #[tokio::test]
    async fn cart_total_accepts_numeric_prefix() {
        let (status, body) = get_json("/cart-total?newItemPrice=12abc&cartTotal=40").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"].as_f64(), Some(52.0));
    }

    #[tokio::test]
    async fn membership_discount_applies_ten_percent() {
        let (status, body) = get_json("/membership-discount?cartTotal=100&isMember=true").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["finalPrice"].as_f64(), Some(90.0));
    }

    #[tokio::test]
    async fn membership_discount_defaults_to_full_price() {
        let (status, body) = get_json("/membership-discount?cartTotal=100").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["finalPrice"].as_f64(), Some(100.0));
    }

    // Only the exact literal "true" counts as membership.
    #[tokio::test]
    async fn membership_flag_is_case_sensitive() {
        for flag in ["True", "TRUE", "1", "yes"] {
            let uri = format!("/membership-discount?cartTotal=100&isMember={flag}");
            let (status, body) = get_json(&uri).await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body["finalPrice"].as_f64(), Some(100.0));
        }
    }

    #[tokio::test]
    async fn membership_discount_rejects_bad_total() {
        let (status, body) = get_json("/membership-discount?cartTotal=abc&isMember=true").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid cartTotal: must be a number");
    }

    #[tokio::test]
    async fn calculate_tax_is_five_percent() {
        let (status, body) = get_json("/calculate-tax?cartTotal=200").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["tax"].as_f64(), Some(10.0));
    }

    #[tokio::test]
    async fn calculate_tax_rejects_missing_total() {
        let (status, body) = get_json("/calculate-tax").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid cartTotal: must be a number");
    }

    #[tokio::test]
    async fn estimate_delivery_standard_rounds_up() {
        let (status, body) =
            get_json("/estimate-delivery?shippingMethod=standard&distance=120").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["days"].as_i64(), Some(3));
    }

    #[tokio::test]
    async fn estimate_delivery_express_covers_more_per_day() {
        let (status, body) =
            get_json("/estimate-delivery?shippingMethod=express&distance=120").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["days"].as_i64(), Some(2));
    }

    #[tokio::test]
    async fn estimate_delivery_rejects_unknown_method() {
        let (status, body) =
            get_json("/estimate-delivery?shippingMethod=overnight&distance=120").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["error"],
            "Invalid shipping method: must be \"standard\" or \"express\""
        );
    }

    // Distance is validated before the shipping method.
    #[tokio::test]
    async fn estimate_delivery_reports_bad_distance_first() {
        let (status, body) =
            get_json("/estimate-delivery?shippingMethod=overnight&distance=abc").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid distance: must be a number");
    }

    #[tokio::test]
    async fn estimate_delivery_rejects_missing_method() {
        let (status, body) = get_json("/estimate-delivery?distance=120").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["error"],
            "Invalid shipping method: must be \"standard\" or \"express\""
        );
    }

    #[tokio::test]
    async fn loyalty_points_double_the_amount() {
        let (status, body) = get_json("/loyalty-points?purchaseAmount=30").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["loyaltyPoints"].as_f64(), Some(60.0));
    }

    #[tokio::test]
    async fn loyalty_points_reject_missing_amount() {
        let (status, body) = get_json("/loyalty-points").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid purchaseAmount: must be a number");
    }

    // Same query, same answer: handlers are pure.
    #[tokio::test]
    async fn identical_queries_yield_identical_bodies() {
        let (_, first) = get_json("/calculate-tax?cartTotal=19.99").await;
        let (_, second) = get_json("/calculate-tax?cartTotal=19.99").await;
        assert_eq!(first, second);
    }
}
