//! # Jai Prakash Yantra
//!
//! Hemispherical bowl sunk into the ground, split across two marble slabs,
//! with cross wires strung over the rim whose shadow marks celestial
//! coordinates on the inner surface.
//!
//! ## Proportions (s = base size)
//!
//! - hemisphereRadius = s
//! - rimWidth = hemisphereRadius × 0.1
//! - crossWireSpacing = hemisphereRadius × 0.2
//! - numberOfMarbleSlabs = 2
//! - depthOfHemisphere = hemisphereRadius

use serde::{Deserialize, Serialize};

use crate::config::CalculatorConfig;
use crate::display::DimensionField;

const RIM_WIDTH_RATIO: f64 = 0.1;
const CROSS_WIRE_RATIO: f64 = 0.2;
const MARBLE_SLABS: u32 = 2;

/// Jai Prakash Yantra dimension set (`celestial_coordinates` category).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct JaiPrakashDimensions {
    pub hemisphere_radius: f64,
    pub rim_width: f64,
    pub cross_wire_spacing: f64,
    pub number_of_marble_slabs: u32,
    /// Bowl depth below the rim (m); a true hemisphere, so equal to the radius
    pub depth_of_hemisphere: f64,
}

impl JaiPrakashDimensions {
    pub fn fields(&self) -> Vec<DimensionField> {
        vec![
            DimensionField::length("hemisphereRadius", self.hemisphere_radius),
            DimensionField::length("rimWidth", self.rim_width),
            DimensionField::length("crossWireSpacing", self.cross_wire_spacing),
            DimensionField::count("numberOfMarbleSlabs", self.number_of_marble_slabs),
            DimensionField::length("depthOfHemisphere", self.depth_of_hemisphere),
        ]
    }
}

/// Calculate Jai Prakash Yantra dimensions.
pub fn calculate(config: &CalculatorConfig) -> JaiPrakashDimensions {
    let hemisphere_radius = config.base_size_m;

    JaiPrakashDimensions {
        hemisphere_radius,
        rim_width: hemisphere_radius * RIM_WIDTH_RATIO,
        cross_wire_spacing: hemisphere_radius * CROSS_WIRE_RATIO,
        number_of_marble_slabs: MARBLE_SLABS,
        depth_of_hemisphere: hemisphere_radius,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_proportions() {
        let d = calculate(&CalculatorConfig::new(28.6271, 77.2166, 5.0).unwrap());
        assert_eq!(d.hemisphere_radius, 5.0);
        assert!((d.rim_width - 0.5).abs() < 1e-12);
        assert!((d.cross_wire_spacing - 1.0).abs() < 1e-12);
        assert_eq!(d.number_of_marble_slabs, 2);
        assert_eq!(d.depth_of_hemisphere, d.hemisphere_radius);
    }
}
