//! Loyalty module — points earned per purchase

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
