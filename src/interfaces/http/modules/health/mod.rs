//! Health module — service liveness check

pub mod handlers;

pub use handlers::*;
