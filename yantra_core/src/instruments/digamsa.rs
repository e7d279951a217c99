//! # Digamsa Yantra
//!
//! Central pillar surrounded by a graduated circle, with a sighting bar
//! across the circle for reading azimuth.
//!
//! ## Proportions (s = base size)
//!
//! - baseRadius = s
//! - pillarHeight = baseRadius × 2
//! - circleRadius = baseRadius × 0.9
//! - compassDivisions = 360
//! - sightingBarLength = circleRadius × 2

use serde::{Deserialize, Serialize};

use crate::config::CalculatorConfig;
use crate::display::DimensionField;

const PILLAR_RATIO: f64 = 2.0;
const CIRCLE_RATIO: f64 = 0.9;
const COMPASS_DIVISIONS: u32 = 360;

/// Digamsa Yantra dimension set (`azimuth` category).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DigamsaDimensions {
    pub base_radius: f64,
    pub pillar_height: f64,
    pub circle_radius: f64,
    pub compass_divisions: u32,
    pub sighting_bar_length: f64,
}

impl DigamsaDimensions {
    pub fn fields(&self) -> Vec<DimensionField> {
        vec![
            DimensionField::length("baseRadius", self.base_radius),
            DimensionField::length("pillarHeight", self.pillar_height),
            DimensionField::length("circleRadius", self.circle_radius),
            DimensionField::count("compassDivisions", self.compass_divisions),
            DimensionField::length("sightingBarLength", self.sighting_bar_length),
        ]
    }
}

/// Calculate Digamsa Yantra dimensions.
pub fn calculate(config: &CalculatorConfig) -> DigamsaDimensions {
    let base_radius = config.base_size_m;
    let circle_radius = base_radius * CIRCLE_RATIO;

    DigamsaDimensions {
        base_radius,
        pillar_height: base_radius * PILLAR_RATIO,
        circle_radius,
        compass_divisions: COMPASS_DIVISIONS,
        sighting_bar_length: circle_radius * 2.0,
    }
}
