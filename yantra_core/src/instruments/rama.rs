//! # Rama Yantra
//!
//! Open cylinder with a central pillar, divided into sectors for reading
//! altitude and azimuth.
//!
//! ## Proportions (s = base size)
//!
//! - cylinderRadius = s
//! - cylinderHeight = cylinderRadius × 0.3
//! - pillarHeight = cylinderHeight × 1.5
//! - sectorAngle = 90°, numberOfSectors = 4

use serde::{Deserialize, Serialize};

use crate::config::CalculatorConfig;
use crate::display::DimensionField;

const HEIGHT_RATIO: f64 = 0.3;
const PILLAR_RATIO: f64 = 1.5;
const SECTOR_ANGLE_DEG: f64 = 90.0;
const NUMBER_OF_SECTORS: u32 = 4;

/// Rama Yantra dimension set (`altitude_azimuth` category).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RamaDimensions {
    pub cylinder_radius: f64,
    pub cylinder_height: f64,
    /// Central pillar height (m)
    pub pillar_height: f64,
    /// Angular width of one sector (°)
    pub sector_angle: f64,
    pub number_of_sectors: u32,
}

impl RamaDimensions {
    pub fn fields(&self) -> Vec<DimensionField> {
        vec![
            DimensionField::length("cylinderRadius", self.cylinder_radius),
            DimensionField::length("cylinderHeight", self.cylinder_height),
            DimensionField::length("pillarHeight", self.pillar_height),
            DimensionField::angle("sectorAngle", self.sector_angle),
            DimensionField::count("numberOfSectors", self.number_of_sectors),
        ]
    }
}

/// Calculate Rama Yantra dimensions.
pub fn calculate(config: &CalculatorConfig) -> RamaDimensions {
    let cylinder_radius = config.base_size_m;
    let cylinder_height = cylinder_radius * HEIGHT_RATIO;

    RamaDimensions {
        cylinder_radius,
        cylinder_height,
        pillar_height: cylinder_height * PILLAR_RATIO,
        sector_angle: SECTOR_ANGLE_DEG,
        number_of_sectors: NUMBER_OF_SECTORS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_size_10() {
        for lat in [12.0, 26.9124, 60.0] {
            let config = CalculatorConfig::new(lat, 75.0, 10.0).unwrap();
            let d = calculate(&config);
            assert_eq!(d.cylinder_radius, 10.0);
            assert_eq!(d.cylinder_height, 3.0);
            assert_eq!(d.pillar_height, 4.5);
            assert_eq!(d.sector_angle, 90.0);
            assert_eq!(d.number_of_sectors, 4);
        }
    }
}
