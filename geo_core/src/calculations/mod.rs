//! # Geotechnical Calculations
//!
//! This module contains all geotechnical calculation types. Each calculation
//! follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input) -> Result<*Result, GeoError>` - Pure calculation function
//!
//! ## LLM Integration
//!
//! All types are designed for LLM consumption:
//! - Comprehensive rustdoc with examples
//! - Clean JSON serialization
//! - Structured error responses
//!
//! ## Available Calculations
//!
//! - [`bearing`] - Terzaghi ultimate bearing capacity for shallow strip footings

pub mod bearing;

// Re-export commonly used types
pub use bearing::{BearingCapacityFactors, TerzaghiInput, TerzaghiResult};
