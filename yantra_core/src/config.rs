//! # Calculator Configuration
//!
//! [`CalculatorConfig`] is the single input to the dimension engine: where
//! the instruments stand and how large they are.
//!
//! ## Base Size Policy
//!
//! A base size of zero, below zero, or non-finite is rejected with
//! [`CalcError::InvalidBaseSize`]. The engine never emits degenerate
//! (zero or negative) dimensions.
//!
//! ## Longitude
//!
//! Longitude is accepted and carried on the config but no formula reads it.
//! Every instrument's shape depends only on latitude and base size.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "latitude_deg": 26.9124,
//!   "longitude_deg": 75.7873,
//!   "base_size_m": 10.0
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::units::{Degrees, Meters, Radians};

/// Default site latitude (Jantar Mantar, Jaipur)
pub const DEFAULT_LATITUDE_DEG: f64 = 26.9124;

/// Default site longitude (Jantar Mantar, Jaipur)
pub const DEFAULT_LONGITUDE_DEG: f64 = 75.7873;

/// Default base size in meters
pub const DEFAULT_BASE_SIZE_M: f64 = 10.0;

/// Input parameters for one calculation request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculatorConfig {
    /// Geographic latitude in degrees (positive north)
    pub latitude_deg: f64,

    /// Geographic longitude in degrees (positive east). Not used by any formula.
    pub longitude_deg: f64,

    /// Base size in meters; every length scales linearly with it
    pub base_size_m: f64,
}

/// Which side of the equator the site lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hemisphere {
    Northern,
    Southern,
}

impl std::fmt::Display for Hemisphere {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Hemisphere::Northern => write!(f, "Northern"),
            Hemisphere::Southern => write!(f, "Southern"),
        }
    }
}

impl CalculatorConfig {
    /// Create a validated configuration.
    ///
    /// # Example
    ///
    /// ```rust
    /// use yantra_core::config::CalculatorConfig;
    ///
    /// let config = CalculatorConfig::new(28.6271, 77.2166, 5.0).unwrap();
    /// assert_eq!(config.base_size_m, 5.0);
    ///
    /// assert!(CalculatorConfig::new(0.0, 77.2166, 5.0).is_err());
    /// ```
    pub fn new(latitude_deg: f64, longitude_deg: f64, base_size_m: f64) -> CalcResult<Self> {
        let config = CalculatorConfig {
            latitude_deg,
            longitude_deg,
            base_size_m,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate input parameters.
    ///
    /// Latitude must satisfy 0° < |latitude| < 90°: at the equator the
    /// gnomon base is unbounded and at the poles it collapses to zero.
    pub fn validate(&self) -> CalcResult<()> {
        let lat = self.latitude_deg;
        if !lat.is_finite() {
            return Err(CalcError::invalid_latitude(
                lat.to_string(),
                "Latitude must be a finite number",
            ));
        }
        if lat.abs() >= 90.0 {
            return Err(CalcError::invalid_latitude(
                lat.to_string(),
                "Latitude must lie strictly between -90° and 90°",
            ));
        }
        if lat == 0.0 {
            return Err(CalcError::invalid_latitude(
                lat.to_string(),
                "Latitude 0° (equator) makes the gnomon base unbounded",
            ));
        }
        if !self.longitude_deg.is_finite() {
            return Err(CalcError::invalid_input(
                "longitude_deg",
                self.longitude_deg.to_string(),
                "Longitude must be a finite number",
            ));
        }
        if !self.base_size_m.is_finite() {
            return Err(CalcError::invalid_base_size(
                self.base_size_m.to_string(),
                "Base size must be a finite number",
            ));
        }
        if self.base_size_m <= 0.0 {
            return Err(CalcError::invalid_base_size(
                self.base_size_m.to_string(),
                "Base size must be positive",
            ));
        }
        Ok(())
    }

    /// Latitude as a typed angle
    pub fn latitude(&self) -> Degrees {
        Degrees(self.latitude_deg)
    }

    /// Magnitude of the latitude in radians.
    ///
    /// Southern sites mirror the northern geometry, so formulas use |φ|.
    pub fn latitude_magnitude_rad(&self) -> Radians {
        Degrees(self.latitude_deg.abs()).into()
    }

    /// Base size as a typed length
    pub fn base_size(&self) -> Meters {
        Meters(self.base_size_m)
    }

    /// Hemisphere the site lies in
    pub fn hemisphere(&self) -> Hemisphere {
        if self.latitude_deg < 0.0 {
            Hemisphere::Southern
        } else {
            Hemisphere::Northern
        }
    }
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        CalculatorConfig {
            latitude_deg: DEFAULT_LATITUDE_DEG,
            longitude_deg: DEFAULT_LONGITUDE_DEG,
            base_size_m: DEFAULT_BASE_SIZE_M,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = CalculatorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.hemisphere(), Hemisphere::Northern);
    }

    #[test]
    fn test_latitude_bounds() {
        for lat in [0.0, 90.0, -90.0, 90.5, -120.0, f64::NAN, f64::INFINITY] {
            let err = CalculatorConfig::new(lat, 75.0, 10.0).unwrap_err();
            assert_eq!(err.error_code(), "INVALID_LATITUDE", "latitude {}", lat);
        }
        assert!(CalculatorConfig::new(89.999, 75.0, 10.0).is_ok());
        assert!(CalculatorConfig::new(-0.001, 75.0, 10.0).is_ok());
    }

    #[test]
    fn test_base_size_policy() {
        for size in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = CalculatorConfig::new(26.9, 75.0, size).unwrap_err();
            assert_eq!(err.error_code(), "INVALID_BASE_SIZE", "size {}", size);
        }
    }

    #[test]
    fn test_longitude_must_be_finite() {
        let err = CalculatorConfig::new(26.9, f64::NAN, 10.0).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
        assert!(CalculatorConfig::new(26.9, -179.0, 10.0).is_ok());
    }

    #[test]
    fn test_southern_hemisphere() {
        let config = CalculatorConfig::new(-33.86, 151.2, 10.0).unwrap();
        assert_eq!(config.hemisphere(), Hemisphere::Southern);
        let north = CalculatorConfig::new(33.86, 151.2, 10.0).unwrap();
        assert_eq!(config.latitude_magnitude_rad(), north.latitude_magnitude_rad());
    }

    #[test]
    fn test_serialization() {
        let config = CalculatorConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"latitude_deg\":26.9124"));
        let roundtrip: CalculatorConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, roundtrip);
    }
}
