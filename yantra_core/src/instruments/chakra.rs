//! # Chakra Yantra
//!
//! Graduated metal ring mounted on a pole, with a crossbar spanning its
//! diameter, used for measuring angular positions.
//!
//! ## Proportions (s = base size)
//!
//! - outerRadius = s × 0.8
//! - innerRadius = outerRadius × 0.15
//! - thickness = outerRadius × 0.05
//! - graduations = 360
//! - crossBarLength = outerRadius × 2
//! - poleHeight = outerRadius × 1.5

use serde::{Deserialize, Serialize};

use crate::config::CalculatorConfig;
use crate::display::DimensionField;

const OUTER_RADIUS_RATIO: f64 = 0.8;
const INNER_RADIUS_RATIO: f64 = 0.15;
const THICKNESS_RATIO: f64 = 0.05;
const POLE_HEIGHT_RATIO: f64 = 1.5;
const GRADUATIONS: u32 = 360;

/// Chakra Yantra dimension set (`angular_measurement` category).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ChakraDimensions {
    pub outer_radius: f64,
    /// Radius of the central hub (m)
    pub inner_radius: f64,
    /// Ring thickness (m)
    pub thickness: f64,
    /// Scale divisions around the ring
    pub graduations: u32,
    pub cross_bar_length: f64,
    pub pole_height: f64,
}

impl ChakraDimensions {
    pub fn fields(&self) -> Vec<DimensionField> {
        vec![
            DimensionField::length("outerRadius", self.outer_radius),
            DimensionField::length("innerRadius", self.inner_radius),
            DimensionField::length("thickness", self.thickness),
            DimensionField::count("graduations", self.graduations),
            DimensionField::length("crossBarLength", self.cross_bar_length),
            DimensionField::length("poleHeight", self.pole_height),
        ]
    }
}

/// Calculate Chakra Yantra dimensions.
pub fn calculate(config: &CalculatorConfig) -> ChakraDimensions {
    let outer_radius = config.base_size_m * OUTER_RADIUS_RATIO;

    ChakraDimensions {
        outer_radius,
        inner_radius: outer_radius * INNER_RADIUS_RATIO,
        thickness: outer_radius * THICKNESS_RATIO,
        graduations: GRADUATIONS,
        cross_bar_length: outer_radius * 2.0,
        pole_height: outer_radius * POLE_HEIGHT_RATIO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_proportions() {
        let d = calculate(&CalculatorConfig::new(26.9124, 75.7873, 10.0).unwrap());
        assert!((d.outer_radius - 8.0).abs() < 1e-12);
        assert!((d.inner_radius - 1.2).abs() < 1e-12);
        assert!((d.thickness - 0.4).abs() < 1e-12);
        assert_eq!(d.graduations, 360);
        assert!((d.cross_bar_length - 16.0).abs() < 1e-12);
        assert!((d.pole_height - 12.0).abs() < 1e-12);
    }
}
