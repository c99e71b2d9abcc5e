//! Representative Soil Parameters
//!
//! Typical shear strength and unit weight values for common soil classes,
//! for quick preliminary checks when site investigation data is not yet
//! available. Values are mid-range figures from standard geotechnical
//! references; they are no substitute for lab or in-situ testing.

use serde::{Deserialize, Serialize};

/// Common soil classes with representative parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoilClass {
    /// Soft saturated clay
    SoftClay,
    /// Stiff overconsolidated clay
    StiffClay,
    /// Loose poorly-graded sand
    LooseSand,
    /// Dense well-graded sand
    DenseSand,
    /// Compacted sandy gravel
    SandyGravel,
}

impl SoilClass {
    /// All soil class variants for UI selection
    pub const ALL: [SoilClass; 5] = [
        SoilClass::SoftClay,
        SoilClass::StiffClay,
        SoilClass::LooseSand,
        SoilClass::DenseSand,
        SoilClass::SandyGravel,
    ];

    /// Representative parameters for this soil class
    pub fn properties(&self) -> SoilProperties {
        match self {
            SoilClass::SoftClay => SoilProperties {
                cohesion_kpa: 20.0,
                friction_angle_deg: 0.0,
                unit_weight_kn_m3: 16.0,
            },
            SoilClass::StiffClay => SoilProperties {
                cohesion_kpa: 75.0,
                friction_angle_deg: 5.0,
                unit_weight_kn_m3: 19.0,
            },
            SoilClass::LooseSand => SoilProperties {
                cohesion_kpa: 0.0,
                friction_angle_deg: 29.0,
                unit_weight_kn_m3: 17.0,
            },
            SoilClass::DenseSand => SoilProperties {
                cohesion_kpa: 0.0,
                friction_angle_deg: 38.0,
                unit_weight_kn_m3: 20.0,
            },
            SoilClass::SandyGravel => SoilProperties {
                cohesion_kpa: 0.0,
                friction_angle_deg: 36.0,
                unit_weight_kn_m3: 21.0,
            },
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            SoilClass::SoftClay => "Soft clay",
            SoilClass::StiffClay => "Stiff clay",
            SoilClass::LooseSand => "Loose sand",
            SoilClass::DenseSand => "Dense sand",
            SoilClass::SandyGravel => "Sandy gravel",
        }
    }
}

impl std::fmt::Display for SoilClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Shear strength and unit weight parameters for a soil.
///
/// ## JSON Example
///
/// ```json
/// {
///   "cohesion_kpa": 75.0,
///   "friction_angle_deg": 5.0,
///   "unit_weight_kn_m3": 19.0
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SoilProperties {
    /// Cohesion c (kPa)
    pub cohesion_kpa: f64,

    /// Internal friction angle phi (degrees)
    pub friction_angle_deg: f64,

    /// Unit weight gamma (kN/m³)
    pub unit_weight_kn_m3: f64,
}
