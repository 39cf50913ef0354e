//! Shipping method entity

use std::str::FromStr;

use crate::domain::error::DomainError;

/// Delivery mode selecting how much distance is covered per day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShippingMethod {
    /// Ground shipping, 50 distance units per day
    Standard,
    /// Expedited shipping, 100 distance units per day
    Express,
}

impl ShippingMethod {
    /// Distance covered per delivery day.
    pub fn distance_per_day(self) -> f64 {
        match self {
            Self::Standard => 50.0,
            Self::Express => 100.0,
        }
    }
}

impl FromStr for ShippingMethod {
    type Err = DomainError;

    /// Accepts exactly `standard` or `express`. Anything else is
    /// rejected, including different casing.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standard" => Ok(Self::Standard),
            "express" => Ok(Self::Express),
            _ => Err(DomainError::InvalidShippingMethod),
        }
    }
}

impl std::fmt::Display for ShippingMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Standard => write!(f, "standard"),
            Self::Express => write!(f, "express"),
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────
