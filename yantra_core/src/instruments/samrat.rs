//! # Samrat Yantra
//!
//! Equinoctial sundial: a right-triangular gnomon whose hypotenuse points at
//! the celestial pole, flanked by quadrant dials in the equatorial plane.
//! This is the only instrument whose proportions depend on latitude.
//!
//! ## Proportions (s = base size, φ = |latitude|)
//!
//! | Field | Formula |
//! |-------|---------|
//! | gnomonHeight | s |
//! | gnomonBase | s / tan(φ) |
//! | hypotenuse | √(height² + base²) |
//! | dialRadius | gnomonBase × 1.5 |
//! | gnomonAngle | \|latitude\| in degrees |
//! | quadrantArcLength | dialRadius × π / 2 |
//!
//! Southern sites use the magnitude of the latitude; the gnomon then points
//! at the south celestial pole with identical proportions.

use serde::{Deserialize, Serialize};

use crate::config::CalculatorConfig;
use crate::display::DimensionField;
use crate::equations::{self, gnomon_base, gnomon_hypotenuse, quarter_arc_length};
use crate::errors::{CalcError, CalcResult};

/// Dial radius relative to the gnomon base
const DIAL_RADIUS_RATIO: f64 = 1.5;

/// Samrat Yantra dimension set (`sundial` category).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SamratDimensions {
    /// Vertical leg of the gnomon (m)
    pub gnomon_height: f64,
    /// Horizontal leg of the gnomon along the meridian (m)
    pub gnomon_base: f64,
    /// Sloping edge parallel to the Earth's axis (m)
    pub hypotenuse: f64,
    /// Radius of the quadrant dials (m)
    pub dial_radius: f64,
    /// Elevation of the hypotenuse above the horizon (°)
    pub gnomon_angle: f64,
    /// Length of one quadrant arc (m)
    pub quadrant_arc_length: f64,
}

impl SamratDimensions {
    pub fn fields(&self) -> Vec<DimensionField> {
        vec![
            DimensionField::length("gnomonHeight", self.gnomon_height),
            DimensionField::length("gnomonBase", self.gnomon_base),
            DimensionField::length("hypotenuse", self.hypotenuse),
            DimensionField::length("dialRadius", self.dial_radius),
            DimensionField::angle("gnomonAngle", self.gnomon_angle),
            DimensionField::length("quadrantArcLength", self.quadrant_arc_length),
        ]
    }
}

/// Calculate Samrat Yantra dimensions.
///
/// Expects a validated config. Latitudes that pass validation but sit so
/// close to the equator that the gnomon base overflows are still rejected.
pub fn calculate(config: &CalculatorConfig) -> CalcResult<SamratDimensions> {
    let phi = config.latitude_magnitude_rad();
    let gnomon_height = config.base_size().value();
    let gnomon_base = gnomon_base(gnomon_height, phi);

    if !gnomon_base.is_finite() || gnomon_base <= 0.0 {
        // Blame the latitude only if even a unit gnomon is unbounded there
        let unit_base = equations::gnomon_base(1.0, phi);
        if unit_base.is_finite() && unit_base > 0.0 {
            return Err(CalcError::invalid_base_size(
                config.base_size_m.to_string(),
                "Base size is too large: the gnomon base overflows",
            ));
        }
        return Err(CalcError::invalid_latitude(
            config.latitude_deg.to_string(),
            "Latitude is too close to the equator or a pole for a finite gnomon",
        ));
    }

    let hypotenuse = gnomon_hypotenuse(gnomon_height, gnomon_base);
    let dial_radius = gnomon_base * DIAL_RADIUS_RATIO;

    Ok(SamratDimensions {
        gnomon_height,
        gnomon_base,
        hypotenuse,
        dial_radius,
        gnomon_angle: config.latitude().value().abs(),
        quadrant_arc_length: quarter_arc_length(dial_radius),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jaipur() {
        let config = CalculatorConfig::new(26.9124, 75.7873, 10.0).unwrap();
        let d = calculate(&config).unwrap();

        assert_eq!(d.gnomon_height, 10.0);
        // b = 10 / tan(26.9124°) = 19.70 m
        assert!((d.gnomon_base - 19.7005).abs() < 0.001);
        assert!((d.hypotenuse - 22.0932).abs() < 0.001);
        assert!((d.dial_radius - 29.5508).abs() < 0.001);
        assert_eq!(d.gnomon_angle, 26.9124);
        assert!((d.quadrant_arc_length - 46.4182).abs() < 0.001);
    }

    #[test]
    fn test_45_degrees_is_isosceles() {
        let config = CalculatorConfig::new(45.0, 0.0, 4.0).unwrap();
        let d = calculate(&config).unwrap();
        assert!((d.gnomon_base - 4.0).abs() < 1e-9);
        assert!((d.hypotenuse - 4.0 * 2.0_f64.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn test_southern_site_mirrors_northern() {
        let north = calculate(&CalculatorConfig::new(33.86, 151.2, 10.0).unwrap()).unwrap();
        let south = calculate(&CalculatorConfig::new(-33.86, 151.2, 10.0).unwrap()).unwrap();
        assert_eq!(north, south);
        assert_eq!(south.gnomon_angle, 33.86);
    }

    #[test]
    fn test_overflow_from_base_size() {
        let config = CalculatorConfig::new(10.0, 0.0, 1e308).unwrap();
        let err = calculate(&config).unwrap_err();
        assert!(matches!(err, CalcError::InvalidBaseSize { .. }));
    }

    #[test]
    fn test_overflow_from_latitude() {
        // Subnormal latitude: even a 1 m gnomon has an unbounded base
        let config = CalculatorConfig::new(1e-310, 0.0, 1.0).unwrap();
        let err = calculate(&config).unwrap_err();
        assert!(matches!(err, CalcError::InvalidLatitude { .. }));
    }

    #[test]
    fn test_fields_order() {
        let d = calculate(&CalculatorConfig::default()).unwrap();
        let names: Vec<_> = d.fields().iter().map(|f| f.name).collect();
        assert_eq!(
            names,
            ["gnomonHeight", "gnomonBase", "hypotenuse", "dialRadius", "gnomonAngle", "quadrantArcLength"]
        );
    }
}
