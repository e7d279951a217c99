//! # Gnomon Formulas
//!
//! Geometry of a right-triangular gnomon whose hypotenuse is parallel to
//! the Earth's axis.
//!
//! ```text
//!                  /|
//!     hypotenuse  / |
//!                /  | height
//!               /φ  |
//!              /____|
//!               base
//! ```
//!
//! ## Notation
//!
//! - `h` = Gnomon height (vertical leg)
//! - `b` = Gnomon base (horizontal leg, along the meridian)
//! - `φ` = Site latitude
//! - `r` = Dial radius

use std::f64::consts::PI;

use crate::units::Radians;

/// Calculate the horizontal base of the gnomon triangle
///
/// # Formula
/// b = h / tan(φ)
///
/// Unbounded as φ → 0 and zero at φ = 90°; callers validate the latitude
/// before evaluating it.
///
/// # Example
/// ```rust
/// use yantra_core::equations::gnomon::gnomon_base;
/// use yantra_core::units::{Degrees, Radians};
///
/// let phi: Radians = Degrees(45.0).into();
/// assert!((gnomon_base(10.0, phi) - 10.0).abs() < 1e-9);
/// ```
#[inline]
pub fn gnomon_base(height: f64, phi: Radians) -> f64 {
    height / phi.tan()
}

/// Calculate the hypotenuse (style edge) of the gnomon triangle
///
/// # Formula
/// c = √(h² + b²)
///
/// Evaluated without squaring overflow, so any pair of finite legs gives a
/// finite hypotenuse when the true value is representable.
///
/// # Example
/// ```rust
/// use yantra_core::equations::gnomon::gnomon_hypotenuse;
///
/// assert!((gnomon_hypotenuse(3.0, 4.0) - 5.0).abs() < 1e-12);
/// ```
#[inline]
pub fn gnomon_hypotenuse(height: f64, base: f64) -> f64 {
    height.hypot(base)
}

/// Calculate the arc length of a quarter circle
///
/// The Samrat dial quadrants each span 90° of the equatorial circle.
///
/// # Formula
/// s = r × π / 2
#[inline]
pub fn quarter_arc_length(radius: f64) -> f64 {
    radius * PI / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::Degrees;

    #[test]
    fn test_gnomon_base_shrinks_toward_pole() {
        let low: Radians = Degrees(10.0).into();
        let high: Radians = Degrees(80.0).into();
        assert!(gnomon_base(1.0, low) > gnomon_base(1.0, high));
    }

    #[test]
    fn test_gnomon_hypotenuse_matches_sine() {
        // c = h / sin(φ) for the same triangle
        let phi: Radians = Degrees(30.0).into();
        let base = gnomon_base(10.0, phi);
        let c = gnomon_hypotenuse(10.0, base);
        assert!((c - 10.0 / phi.0.sin()).abs() < 1e-9);
    }

    #[test]
    fn test_gnomon_hypotenuse_large_legs() {
        let c = gnomon_hypotenuse(1e200, 1e200);
        assert!(c.is_finite());
        assert!((c / 1e200 - 2.0_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_quarter_arc_length() {
        assert!((quarter_arc_length(2.0) - PI).abs() < 1e-12);
    }
}
