//! # Unit Types
//!
//! Type-safe wrappers for the few units the engine deals with. These are
//! plain f64 newtypes so JSON stays clean (just numbers).
//!
//! - Length: meters (m)
//! - Angle: degrees (°) at the API boundary, radians internally for trigonometry
//!
//! ## Example
//!
//! ```rust
//! use yantra_core::units::{Degrees, Radians};
//!
//! let latitude = Degrees(90.0);
//! let phi: Radians = latitude.into();
//! assert!((phi.0 - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// Length Units
// ============================================================================

/// Length in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

// ============================================================================
// Angle Units
// ============================================================================

/// Angle in degrees
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Degrees(pub f64);

/// Angle in radians
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Radians(pub f64);

impl From<Degrees> for Radians {
    fn from(deg: Degrees) -> Self {
        Radians(deg.0.to_radians())
    }
}

impl Meters {
    /// Get the raw f64 value
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Degrees {
    /// Get the raw f64 value
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Radians {
    /// Tangent of the angle
    pub fn tan(self) -> f64 {
        self.0.tan()
    }
}
