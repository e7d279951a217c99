//! # Dimension Display
//!
//! Self-describing view of a dimension set for tabular output. Field names
//! are the stable camelCase identifiers used in JSON; labels and unit
//! suffixes are derived from them for people.
//!
//! ## Example
//!
//! ```rust
//! use yantra_core::display::{DimensionField, DimensionUnit};
//!
//! let field = DimensionField::new("gnomonAngle", 26.9124, DimensionUnit::Angle);
//! assert_eq!(field.label(), "Gnomon Angle");
//! assert_eq!(field.formatted(), "26.91°");
//! ```

use serde::Serialize;

/// What a dimension value measures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DimensionUnit {
    /// Meters
    Length,
    /// Degrees
    Angle,
    /// Dimensionless count (graduations, sectors, slabs)
    Count,
}

impl DimensionUnit {
    pub fn suffix(&self) -> &'static str {
        match self {
            DimensionUnit::Length => " m",
            DimensionUnit::Angle => "°",
            DimensionUnit::Count => "",
        }
    }
}

/// One named value of an instrument's dimension set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DimensionField {
    /// Stable identifier (e.g. "gnomonBase")
    pub name: &'static str,
    pub value: f64,
    pub unit: DimensionUnit,
}

impl DimensionField {
    pub fn new(name: &'static str, value: f64, unit: DimensionUnit) -> Self {
        DimensionField { name, value, unit }
    }

    pub fn length(name: &'static str, value: f64) -> Self {
        Self::new(name, value, DimensionUnit::Length)
    }

    pub fn angle(name: &'static str, value: f64) -> Self {
        Self::new(name, value, DimensionUnit::Angle)
    }

    pub fn count(name: &'static str, value: u32) -> Self {
        Self::new(name, f64::from(value), DimensionUnit::Count)
    }

    /// Human label, e.g. "quadrantArcLength" -> "Quadrant Arc Length"
    pub fn label(&self) -> String {
        humanize_identifier(self.name)
    }

    /// Value with two decimals and its unit suffix; counts print as integers
    pub fn formatted(&self) -> String {
        match self.unit {
            DimensionUnit::Count => format!("{:.0}", self.value),
            unit => format!("{:.2}{}", self.value, unit.suffix()),
        }
    }
}

/// Split a camelCase identifier into capitalized words.
pub fn humanize_identifier(identifier: &str) -> String {
    let mut label = String::with_capacity(identifier.len() + 4);
    for (i, c) in identifier.chars().enumerate() {
        if i == 0 {
            label.extend(c.to_uppercase());
        } else if c.is_uppercase() {
            label.push(' ');
            label.push(c);
        } else {
            label.push(c);
        }
    }
    label
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_humanize_identifier() {
        assert_eq!(humanize_identifier("numberOfMarbleSlabs"), "Number Of Marble Slabs");
        assert_eq!(humanize_identifier("thickness"), "Thickness");
        assert_eq!(humanize_identifier(""), "");
    }

    #[test]
    fn test_formatting_per_unit() {
        assert_eq!(DimensionField::length("dialRadius", 29.4745).formatted(), "29.47 m");
        assert_eq!(DimensionField::angle("sectorAngle", 90.0).formatted(), "90.00°");
        assert_eq!(DimensionField::count("graduations", 360).formatted(), "360");
    }
}
