//! Epsilons used by the intersection tests.

use serde::{Deserialize, Serialize};

use crate::error::{RayError, Result};

/// Tolerances for the closed-form intersection tests.
///
/// Every field is an absolute threshold compared against the magnitude of an
/// intermediate quantity; they are not scaled by the size of the inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RayTolerance {
    /// Direction components below this are treated as parallel to a box slab.
    pub box_parallel: f64,
    /// `|dot(direction, normal)|` below this means the ray is parallel to a plane.
    pub plane_parallel: f64,
    /// Plane hits this far behind the origin are clamped to `0.0` instead of rejected.
    pub plane_behind: f64,
    /// Triangle determinants with magnitude below this are skipped as parallel.
    pub triangle_determinant: f64,
}

impl RayTolerance {
    /// Stock tolerances.
    pub const DEFAULT: Self = Self {
        box_parallel: 1e-6,
        plane_parallel: 1e-5,
        plane_behind: 1e-5,
        triangle_determinant: f64::EPSILON,
    };

    /// Validate tolerances.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("box_parallel", self.box_parallel),
            ("plane_parallel", self.plane_parallel),
            ("plane_behind", self.plane_behind),
            ("triangle_determinant", self.triangle_determinant),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(RayError::InvalidTolerance(format!(
                    "{name} must be finite and non-negative, got {value}"
                )));
            }
        }
        Ok(())
    }

    /// Parse tolerances from a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let tolerance: Self = toml::from_str(s)?;
        tolerance.validate()?;
        log::debug!("loaded ray tolerance: {tolerance:?}");
        Ok(tolerance)
    }
}

impl Default for RayTolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}
