//! # geo_core - Geotechnical Calculation Engine
//!
//! `geo_core` is the computational heart of Substrata, providing geotechnical
//! foundation calculations with a clean, LLM-friendly API. All inputs and
//! outputs are JSON-serializable, making it ideal for integration with AI
//! assistants via MCP or similar protocols.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Well-Documented**: Every type and function has examples
//!
//! ## Quick Start
//!
//! ```rust
//! use geo_core::calculations::bearing::{calculate, TerzaghiInput};
//!
//! let input = TerzaghiInput {
//!     label: "F-1".to_string(),
//!     cohesion_kpa: 25.0,
//!     friction_angle_deg: 20.0,
//!     unit_weight_kn_m3: 18.0,
//!     footing_width_m: 2.0,
//!     foundation_depth_m: 1.5,
//!     overburden_kpa: None,
//! };
//!
//! let result = calculate(&input).unwrap();
//! println!("q_ult = {:.2} kPa", result.q_ult_kpa);
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - All geotechnical calculation types (bearing capacity, etc.)
//! - [`soils`] - Representative soil parameter presets
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod errors;
pub mod soils;

// Re-export commonly used types at crate root for convenience
pub use calculations::bearing::{BearingCapacityFactors, TerzaghiInput, TerzaghiResult};
pub use errors::{GeoError, GeoResult};
pub use soils::{SoilClass, SoilProperties};
