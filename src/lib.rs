//! # Cart Calculation Service
//!
//! Stateless HTTP service exposing arithmetic calculations for an
//! e-commerce cart: running total, membership discount, sales tax,
//! delivery estimate and loyalty points.
//!
//! ## Architecture
//!
//! - **domain**: pure pricing formulas, core types and the error taxonomy
//! - **shared**: cross-cutting helpers (query validation, shutdown signal)
//! - **interfaces**: HTTP REST API with Swagger documentation
//! - **config**: TOML configuration with sane defaults

pub mod config;
pub mod domain;
pub mod interfaces;
pub mod shared;

pub use config::{default_config_path, AppConfig};

// Re-export API router
pub use interfaces::http::create_api_router;
