//! # yantra_core - Astronomical Instrument Dimension Engine
//!
//! `yantra_core` computes the physical dimensions of five historical
//! astronomical instruments (the yantras of the Jantar Mantar observatories)
//! from a site latitude and a chosen base size. All inputs and outputs are
//! JSON-serializable so any rendering layer can consume them.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions from inputs to records, safe to call from any thread
//! - **Typed**: One fixed dimension struct per instrument category
//! - **All or nothing**: Invalid input fails the whole request, never a partial set
//! - **Rich Errors**: Structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use yantra_core::calculate_all_at;
//!
//! let instruments = calculate_all_at(26.9124, 75.7873, 10.0).unwrap();
//! assert_eq!(instruments[0].name, "Samrat Yantra");
//!
//! // Serialize for a rendering layer
//! let json = serde_json::to_string_pretty(&instruments).unwrap();
//! assert!(json.contains("\"category\": \"sundial\""));
//! ```
//!
//! ## Modules
//!
//! - [`config`] - Calculation inputs and validation
//! - [`instruments`] - Per-instrument dimension formulas and the aggregator
//! - [`equations`] - Gnomon geometry
//! - [`report`] - Result set with default selection and lookups
//! - [`locations`] - Historic observatory presets
//! - [`display`] - Labels and unit formatting for dimension fields
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod config;
pub mod display;
pub mod equations;
pub mod errors;
pub mod instruments;
pub mod locations;
pub mod report;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use config::{CalculatorConfig, Hemisphere};
pub use errors::{CalcError, CalcResult};
pub use instruments::{calculate_all, Dimensions, InstrumentCategory, InstrumentKind, InstrumentSpec};
pub use locations::{find_preset, LocationPreset, PRESETS};
pub use report::SiteReport;

/// Calculate all five instruments from raw inputs.
///
/// `longitude_deg` is carried on the config but no formula depends on it.
///
/// # Errors
///
/// * [`CalcError::InvalidLatitude`] - unless 0° < |latitude| < 90°
/// * [`CalcError::InvalidBaseSize`] - unless base size is finite and positive
pub fn calculate_all_at(latitude_deg: f64, longitude_deg: f64, base_size_m: f64) -> CalcResult<Vec<InstrumentSpec>> {
    let config = CalculatorConfig {
        latitude_deg,
        longitude_deg,
        base_size_m,
    };
    calculate_all(&config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_all_at_matches_config_path() {
        let direct = calculate_all_at(28.6271, 77.2166, 7.5).unwrap();
        let config = CalculatorConfig::new(28.6271, 77.2166, 7.5).unwrap();
        assert_eq!(direct, calculate_all(&config).unwrap());
    }

    #[test]
    fn test_negative_boundaries_rejected() {
        assert!(matches!(calculate_all_at(-90.0, 0.0, 10.0), Err(CalcError::InvalidLatitude { .. })));
        assert!(matches!(calculate_all_at(-0.0, 0.0, 10.0), Err(CalcError::InvalidLatitude { .. })));
    }
}
