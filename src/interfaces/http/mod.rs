//! HTTP REST API interfaces
//!
//! - `common`: error-to-response mapping shared by all handlers
//! - `modules`: request handlers grouped per resource
//! - `router`: API router with Swagger documentation

pub mod common;
pub mod modules;
pub mod router;

pub use router::create_api_router;
