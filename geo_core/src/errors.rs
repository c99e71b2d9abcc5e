//! # Error Types
//!
//! Structured error types for geo_core. These errors are designed to be
//! informative for both humans and LLMs, providing enough context to
//! understand and fix issues programmatically.
//!
//! ## Example
//!
//! ```rust
//! use geo_core::errors::{GeoError, GeoResult};
//!
//! fn validate_width(width_m: f64) -> GeoResult<()> {
//!     if width_m <= 0.0 {
//!         return Err(GeoError::invalid_input(
//!             "footing_width_m",
//!             width_m.to_string(),
//!             "Footing width must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for geo_core operations
pub type GeoResult<T> = Result<T, GeoError>;

/// Structured error type for calculation operations.
///
/// Each variant provides specific context about what went wrong,
/// enabling programmatic error handling by LLMs and other consumers.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum GeoError {
    /// An input value is invalid (out of range, physically meaningless, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Friction angle outside the [0, 90) degree domain of the
    /// Terzaghi factor formulas. tan(phi) is singular at 90 degrees,
    /// so this is rejected up front rather than surfaced as NaN/infinity.
    #[error("Friction angle out of range: {value_deg} deg - must be at least 0 and below 90 degrees")]
    FrictionAngleOutOfRange { value_deg: f64 },

    /// Calculation failed (numeric overflow, non-finite intermediate, etc.)
    #[error("Calculation failed: {calculation_type} - {reason}")]
    CalculationFailed {
        calculation_type: String,
        reason: String,
    },
}

impl GeoError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        GeoError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a FrictionAngleOutOfRange error
    pub fn friction_angle_out_of_range(value_deg: f64) -> Self {
        GeoError::FrictionAngleOutOfRange { value_deg }
    }

    /// Create a CalculationFailed error
    pub fn calculation_failed(calculation_type: impl Into<String>, reason: impl Into<String>) -> Self {
        GeoError::CalculationFailed {
            calculation_type: calculation_type.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            GeoError::InvalidInput { .. } => "INVALID_INPUT",
            GeoError::FrictionAngleOutOfRange { .. } => "FRICTION_ANGLE_OUT_OF_RANGE",
            GeoError::CalculationFailed { .. } => "CALCULATION_FAILED",
        }
    }
}
