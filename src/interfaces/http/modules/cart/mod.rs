//! Cart pricing module — running total, membership discount, sales tax

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
