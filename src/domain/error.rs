//! Domain error taxonomy
//!
//! Exactly two failure kinds exist, both caused by client input. The
//! `Display` strings are part of the API contract: they are returned
//! verbatim in error response bodies.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A required numeric query parameter is absent or unparsable.
    #[error("Invalid {field}: must be a number")]
    InvalidNumber { field: String },

    /// `shippingMethod` is not one of the accepted literals.
    #[error("Invalid shipping method: must be \"standard\" or \"express\"")]
    InvalidShippingMethod,
}

impl DomainError {
    pub fn invalid_number(field: impl Into<String>) -> Self {
        Self::InvalidNumber {
            field: field.into(),
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────
