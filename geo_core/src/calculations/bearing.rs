//! # Terzaghi Bearing Capacity Calculation
//!
//! Computes the ultimate bearing capacity of a shallow strip footing using
//! Terzaghi's classical equation:
//!
//! ```text
//! q_ult = c*Nc + q*Nq + 0.5*gamma*B*Ngamma
//! ```
//!
//! ## Assumptions
//!
//! - Strip (continuous) footing, general shear failure
//! - Homogeneous soil, single layer
//! - Terzaghi's approximate Ngamma = (Nq - 1) * tan(1.4 phi)
//! - Overburden defaults to gamma * Df when not given explicitly
//!
//! ## Example (LLM-friendly)
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
//!
//! println!("Nc = {:.2}", result.factors.n_c);
//! println!("q_ult = {:.2} kPa", result.q_ult_kpa);
//! assert!((result.q_ult_kpa - 595.33).abs() < 0.01);
//! ```

use std::f64::consts::{FRAC_PI_4, PI};

use serde::{Deserialize, Serialize};

use crate::errors::{GeoError, GeoResult};
use crate::soils::SoilClass;

/// Terzaghi's tabulated Nc for purely cohesive soil (phi = 0), where the
/// general (Nq - 1) * cot(phi) formula is singular.
pub const NC_PHI_ZERO: f64 = 5.7;

/// Input parameters for a Terzaghi strip-footing bearing capacity check.
///
/// All inputs use SI units (kPa, kN/m³, m), the convention of most
/// geotechnical references.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "F-1",
///   "cohesion_kpa": 25.0,
///   "friction_angle_deg": 20.0,
///   "unit_weight_kn_m3": 18.0,
///   "footing_width_m": 2.0,
///   "foundation_depth_m": 1.5
/// }
/// ```
///
/// `overburden_kpa` may be supplied to override the gamma*Df default, e.g.
/// when the water table reduces the effective stress at the footing base.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TerzaghiInput {
    /// User label for this footing (e.g., "F-1", "Column footing at Grid B")
    pub label: String,

    /// Soil cohesion c in kPa
    pub cohesion_kpa: f64,

    /// Soil internal friction angle phi in degrees, 0 <= phi < 90
    pub friction_angle_deg: f64,

    /// Soil unit weight gamma in kN/m³
    pub unit_weight_kn_m3: f64,

    /// Strip footing width B in meters
    pub footing_width_m: f64,

    /// Depth of footing base below grade Df in meters
    pub foundation_depth_m: f64,

    /// Effective overburden pressure q at the footing base in kPa.
    /// When absent, derived as gamma * Df.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overburden_kpa: Option<f64>,
}

impl TerzaghiInput {
    /// Build an input from a representative soil preset and footing geometry.
    pub fn for_soil(
        label: impl Into<String>,
        soil: SoilClass,
        footing_width_m: f64,
        foundation_depth_m: f64,
    ) -> Self {
        let props = soil.properties();
        TerzaghiInput {
            label: label.into(),
            cohesion_kpa: props.cohesion_kpa,
            friction_angle_deg: props.friction_angle_deg,
            unit_weight_kn_m3: props.unit_weight_kn_m3,
            footing_width_m,
            foundation_depth_m,
            overburden_kpa: None,
        }
    }

    /// Validate input parameters.
    ///
    /// The friction angle check is a hard domain requirement; the magnitude
    /// checks reject physically meaningless soil and geometry values.
    pub fn validate(&self) -> GeoResult<()> {
        if !(0.0..90.0).contains(&self.friction_angle_deg) {
            return Err(GeoError::friction_angle_out_of_range(self.friction_angle_deg));
        }
        if self.cohesion_kpa < 0.0 {
            return Err(GeoError::invalid_input(
                "cohesion_kpa",
                self.cohesion_kpa.to_string(),
                "Cohesion cannot be negative",
            ));
        }
        if self.unit_weight_kn_m3 <= 0.0 {
            return Err(GeoError::invalid_input(
                "unit_weight_kn_m3",
                self.unit_weight_kn_m3.to_string(),
                "Unit weight must be positive",
            ));
        }
        if self.footing_width_m <= 0.0 {
            return Err(GeoError::invalid_input(
                "footing_width_m",
                self.footing_width_m.to_string(),
                "Footing width must be positive",
            ));
        }
        if self.foundation_depth_m < 0.0 {
            return Err(GeoError::invalid_input(
                "foundation_depth_m",
                self.foundation_depth_m.to_string(),
                "Foundation depth cannot be negative",
            ));
        }
        if let Some(q) = self.overburden_kpa {
            if q < 0.0 {
                return Err(GeoError::invalid_input(
                    "overburden_kpa",
                    q.to_string(),
                    "Overburden pressure cannot be negative",
                ));
            }
        }
        Ok(())
    }

    /// Effective overburden pressure at the footing base (kPa).
    ///
    /// Uses the explicit value when supplied, otherwise gamma * Df.
    pub fn effective_overburden_kpa(&self) -> f64 {
        self.overburden_kpa
            .unwrap_or(self.unit_weight_kn_m3 * self.foundation_depth_m)
    }
}

/// Terzaghi's dimensionless bearing capacity factors, all functions of the
/// friction angle alone.
///
/// ## JSON Example
///
/// ```json
/// {
///   "n_c": 14.83,
///   "n_q": 6.4,
///   "n_gamma": 2.87
/// }
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BearingCapacityFactors {
    /// Cohesion factor Nc
    pub n_c: f64,

    /// Surcharge factor Nq
    pub n_q: f64,

    /// Self-weight factor Ngamma (Terzaghi's approximation)
    pub n_gamma: f64,
}

impl BearingCapacityFactors {
    /// Compute the factors for a friction angle in degrees.
    ///
    /// - `Nq = exp(pi * tan(phi)) * tan^2(pi/4 + phi/2)`
    /// - `Nc = (Nq - 1) * cot(phi)`, except exactly 5.7 at phi = 0 where
    ///   the cotangent is undefined (Terzaghi's tabulated value)
    /// - `Ngamma = (Nq - 1) * tan(1.4 * phi)`
    ///
    /// Fails with [`GeoError::FrictionAngleOutOfRange`] outside [0, 90),
    /// and with [`GeoError::CalculationFailed`] when `exp(pi * tan(phi))`
    /// overflows f64 (phi within a fraction of a degree of 90).
    pub fn for_friction_angle(friction_angle_deg: f64) -> GeoResult<Self> {
        if !(0.0..90.0).contains(&friction_angle_deg) {
            return Err(GeoError::friction_angle_out_of_range(friction_angle_deg));
        }

        let phi_rad = friction_angle_deg.to_radians();

        let n_q = (PI * phi_rad.tan()).exp() * (FRAC_PI_4 + phi_rad / 2.0).tan().powi(2);

        let n_c = if friction_angle_deg == 0.0 {
            NC_PHI_ZERO
        } else {
            (n_q - 1.0) / phi_rad.tan()
        };

        let n_gamma = (n_q - 1.0) * (1.4 * phi_rad).tan();

        if !(n_c.is_finite() && n_q.is_finite() && n_gamma.is_finite()) {
            return Err(GeoError::calculation_failed(
                "bearing_capacity_factors",
                format!(
                    "factors overflow at friction angle {} deg",
                    friction_angle_deg
                ),
            ));
        }

        Ok(BearingCapacityFactors { n_c, n_q, n_gamma })
    }
}

/// Results from a Terzaghi bearing capacity calculation.
///
/// The three term fields decompose `q_ult_kpa` exactly:
/// `q_ult = cohesion_term + surcharge_term + self_weight_term`.
///
/// ## JSON Example
///
/// ```json
/// {
///   "factors": { "n_c": 14.83, "n_q": 6.4, "n_gamma": 2.87 },
///   "overburden_kpa": 27.0,
///   "cohesion_term_kpa": 370.87,
///   "surcharge_term_kpa": 172.78,
///   "self_weight_term_kpa": 51.68,
///   "q_ult_kpa": 595.33
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TerzaghiResult {
    /// Bearing capacity factors used
    pub factors: BearingCapacityFactors,

    /// Effective overburden pressure at the footing base (kPa)
    pub overburden_kpa: f64,

    /// Cohesion contribution c * Nc (kPa)
    pub cohesion_term_kpa: f64,

    /// Surcharge contribution q * Nq (kPa)
    pub surcharge_term_kpa: f64,

    /// Self-weight contribution 0.5 * gamma * B * Ngamma (kPa)
    pub self_weight_term_kpa: f64,

    /// Ultimate bearing capacity q_ult (kPa), unrounded
    pub q_ult_kpa: f64,
}

impl TerzaghiResult {
    /// Name the term contributing most to q_ult.
    pub fn governing_term(&self) -> &'static str {
        let c = self.cohesion_term_kpa;
        let q = self.surcharge_term_kpa;
        let g = self.self_weight_term_kpa;
        if c >= q && c >= g {
            "cohesion"
        } else if q >= g {
            "surcharge"
        } else {
            "self-weight"
        }
    }
}

/// Calculate ultimate bearing capacity per Terzaghi.
///
/// Pure function: no I/O, no shared state, identical inputs always produce
/// identical results. No rounding is applied; presentation formatting is a
/// caller concern.
///
/// # Arguments
///
/// * `input` - Soil and footing parameters
///
/// # Returns
///
/// * `Ok(TerzaghiResult)` - Factors, term breakdown, and q_ult
/// * `Err(GeoError)` - If inputs are invalid or the factors overflow
pub fn calculate(input: &TerzaghiInput) -> GeoResult<TerzaghiResult> {
    input.validate()?;

    let factors = BearingCapacityFactors::for_friction_angle(input.friction_angle_deg)?;
    let overburden_kpa = input.effective_overburden_kpa();

    let cohesion_term_kpa = input.cohesion_kpa * factors.n_c;
    let surcharge_term_kpa = overburden_kpa * factors.n_q;
    let self_weight_term_kpa =
        0.5 * input.unit_weight_kn_m3 * input.footing_width_m * factors.n_gamma;

    let q_ult_kpa = cohesion_term_kpa + surcharge_term_kpa + self_weight_term_kpa;

    if !q_ult_kpa.is_finite() {
        return Err(GeoError::calculation_failed(
            "terzaghi_bearing",
            "ultimate bearing capacity is not finite",
        ));
    }

    Ok(TerzaghiResult {
        factors,
        overburden_kpa,
        cohesion_term_kpa,
        surcharge_term_kpa,
        self_weight_term_kpa,
        q_ult_kpa,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_footing() -> TerzaghiInput {
        TerzaghiInput {
            label: "Test Footing".to_string(),
            cohesion_kpa: 25.0,
            friction_angle_deg: 20.0,
            unit_weight_kn_m3: 18.0,
            footing_width_m: 2.0,
            foundation_depth_m: 1.5,
            overburden_kpa: None,
        }
    }

    #[test]
    fn test_factors_at_20_degrees() {
        let factors = BearingCapacityFactors::for_friction_angle(20.0).unwrap();
        assert!((factors.n_c - 14.8347).abs() < 1e-3);
        assert!((factors.n_q - 6.3994).abs() < 1e-3);
        assert!((factors.n_gamma - 2.8709).abs() < 1e-3);
    }

    #[test]
    fn test_factors_at_30_degrees() {
        let factors = BearingCapacityFactors::for_friction_angle(30.0).unwrap();
        assert!((factors.n_c - 30.1396).abs() < 1e-3);
        assert!((factors.n_q - 18.4011).abs() < 1e-3);
        assert!((factors.n_gamma - 15.6680).abs() < 1e-3);
    }

    #[test]
    fn test_reference_scenario() {
        // Golden value from the reference formula chain:
        // c=25, phi=20, gamma=18, B=2, Df=1.5, q = 18*1.5 = 27
        let result = calculate(&reference_footing()).unwrap();
        assert!((result.overburden_kpa - 27.0).abs() < 1e-12);
        assert!((result.q_ult_kpa - 595.3278).abs() < 1e-2);
    }

    #[test]
    fn test_purity() {
        let input = reference_footing();
        let first = calculate(&input).unwrap();
        let second = calculate(&input).unwrap();
        assert_eq!(first.q_ult_kpa.to_bits(), second.q_ult_kpa.to_bits());
    }

    #[test]
    fn test_phi_zero_uses_tabulated_nc() {
        let factors = BearingCapacityFactors::for_friction_angle(0.0).unwrap();
        assert_eq!(factors.n_c, 5.7);
        assert!((factors.n_q - 1.0).abs() < 1e-12);
        assert!(factors.n_gamma.abs() < 1e-12);
    }

    #[test]
    fn test_purely_cohesive_soil() {
        // phi=0 clay: q_ult = c*5.7 + gamma*Df*1 + 0
        let input = TerzaghiInput {
            label: "Clay".to_string(),
            cohesion_kpa: 50.0,
            friction_angle_deg: 0.0,
            unit_weight_kn_m3: 17.0,
            footing_width_m: 2.0,
            foundation_depth_m: 1.0,
            overburden_kpa: None,
        };
        let result = calculate(&input).unwrap();
        assert!((result.q_ult_kpa - 302.0).abs() < 1e-9);
    }

    #[test]
    fn test_overburden_override() {
        let mut input = reference_footing();
        input.overburden_kpa = Some(100.0);
        let result = calculate(&input).unwrap();
        assert!((result.overburden_kpa - 100.0).abs() < 1e-12);
        assert!((result.q_ult_kpa - 1062.4835).abs() < 1e-2);

        // Result must not depend on the implicit gamma*Df once q is given
        input.foundation_depth_m = 3.0;
        let deeper = calculate(&input).unwrap();
        assert_eq!(result.q_ult_kpa.to_bits(), deeper.q_ult_kpa.to_bits());
    }

    #[test]
    fn test_cohesion_monotonicity() {
        let base = reference_footing();
        let base_result = calculate(&base).unwrap();

        let mut bumped = base.clone();
        bumped.cohesion_kpa += 10.0;
        let bumped_result = calculate(&bumped).unwrap();

        assert!(bumped_result.q_ult_kpa > base_result.q_ult_kpa);
        let expected_delta = 10.0 * base_result.factors.n_c;
        assert!((bumped_result.q_ult_kpa - base_result.q_ult_kpa - expected_delta).abs() < 1e-9);
    }

    #[test]
    fn test_additivity_decomposition() {
        let result = calculate(&reference_footing()).unwrap();
        let factors = BearingCapacityFactors::for_friction_angle(20.0).unwrap();

        let cohesion = 25.0 * factors.n_c;
        let surcharge = 27.0 * factors.n_q;
        let self_weight = 0.5 * 18.0 * 2.0 * factors.n_gamma;

        assert!((result.cohesion_term_kpa - cohesion).abs() < 1e-9);
        assert!((result.surcharge_term_kpa - surcharge).abs() < 1e-9);
        assert!((result.self_weight_term_kpa - self_weight).abs() < 1e-9);
        assert!((result.q_ult_kpa - (cohesion + surcharge + self_weight)).abs() < 1e-9);
    }

    #[test]
    fn test_friction_angle_domain_rejection() {
        let mut input = reference_footing();

        input.friction_angle_deg = 90.0;
        assert_eq!(
            calculate(&input).unwrap_err().error_code(),
            "FRICTION_ANGLE_OUT_OF_RANGE"
        );

        input.friction_angle_deg = -5.0;
        assert_eq!(
            calculate(&input).unwrap_err().error_code(),
            "FRICTION_ANGLE_OUT_OF_RANGE"
        );
    }

    #[test]
    fn test_factor_overflow_near_90() {
        // exp(pi * tan(phi)) overflows f64 just below the domain boundary
        let err = BearingCapacityFactors::for_friction_angle(89.9).unwrap_err();
        assert_eq!(err.error_code(), "CALCULATION_FAILED");
    }

    #[test]
    fn test_invalid_magnitudes() {
        let mut input = reference_footing();
        input.unit_weight_kn_m3 = 0.0;
        assert!(calculate(&input).is_err());

        let mut input = reference_footing();
        input.footing_width_m = -2.0;
        assert!(calculate(&input).is_err());

        let mut input = reference_footing();
        input.cohesion_kpa = -1.0;
        assert!(calculate(&input).is_err());

        let mut input = reference_footing();
        input.overburden_kpa = Some(-10.0);
        assert!(calculate(&input).is_err());
    }

    #[test]
    fn test_governing_term() {
        let result = calculate(&reference_footing()).unwrap();
        // c*Nc = 370.9 dominates q*Nq = 172.8 and 0.5*gamma*B*Ngamma = 51.7
        assert_eq!(result.governing_term(), "cohesion");
    }

    #[test]
    fn test_serialization() {
        let input = reference_footing();
        let json = serde_json::to_string_pretty(&input).unwrap();
        let roundtrip: TerzaghiInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input.cohesion_kpa, roundtrip.cohesion_kpa);
        assert_eq!(input.overburden_kpa, roundtrip.overburden_kpa);

        // overburden_kpa defaults to None when omitted from JSON
        let minimal: TerzaghiInput = serde_json::from_str(
            r#"{
                "label": "F-1",
                "cohesion_kpa": 25.0,
                "friction_angle_deg": 20.0,
                "unit_weight_kn_m3": 18.0,
                "footing_width_m": 2.0,
                "foundation_depth_m": 1.5
            }"#,
        )
        .unwrap();
        assert_eq!(minimal.overburden_kpa, None);
    }
}
