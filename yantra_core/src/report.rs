//! # Site Report
//!
//! The full result of one calculation request: the echoed inputs plus the
//! five instrument records in order. Consumers pick one record at a time,
//! by position, name or category; the first record is the default.
//!
//! ## Example
//!
//! ```rust
//! use yantra_core::config::CalculatorConfig;
//! use yantra_core::report::SiteReport;
//!
//! let report = SiteReport::calculate(CalculatorConfig::default()).unwrap();
//! assert_eq!(report.default_instrument().unwrap().name, "Samrat Yantra");
//! assert!(report.get("chakra").is_some());
//! ```

use serde::{Deserialize, Serialize};

use crate::config::CalculatorConfig;
use crate::errors::CalcResult;
use crate::instruments::{calculate_all, InstrumentCategory, InstrumentKind, InstrumentSpec};

/// Inputs and computed instruments for one site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteReport {
    pub config: CalculatorConfig,
    pub instruments: Vec<InstrumentSpec>,
}

impl SiteReport {
    /// Validate the config and calculate every instrument
    pub fn calculate(config: CalculatorConfig) -> CalcResult<Self> {
        let instruments = calculate_all(&config)?;
        Ok(SiteReport { config, instruments })
    }

    /// First instrument, the default selection for display
    pub fn default_instrument(&self) -> Option<&InstrumentSpec> {
        self.instruments.first()
    }

    /// Find an instrument by name ("Rama Yantra", "rama", ...)
    pub fn get(&self, name: &str) -> Option<&InstrumentSpec> {
        let kind = InstrumentKind::from_str_flexible(name)?;
        self.instruments.iter().find(|spec| spec.name == kind.name())
    }

    /// Find the instrument of a given category
    pub fn by_category(&self, category: InstrumentCategory) -> Option<&InstrumentSpec> {
        self.instruments.iter().find(|spec| spec.category() == category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection() {
        let report = SiteReport::calculate(CalculatorConfig::default()).unwrap();
        assert_eq!(report.default_instrument().unwrap().category(), InstrumentCategory::Sundial);
        assert_eq!(report.get("Digamsa Yantra").unwrap().category(), InstrumentCategory::Azimuth);
        assert_eq!(
            report.by_category(InstrumentCategory::CelestialCoordinates).unwrap().name,
            "Jai Prakash Yantra"
        );
        assert!(report.get("unknown").is_none());
    }

    #[test]
    fn test_invalid_config_yields_no_report() {
        let config = CalculatorConfig {
            latitude_deg: 90.0,
            ..CalculatorConfig::default()
        };
        assert!(SiteReport::calculate(config).is_err());
    }

    #[test]
    fn test_serialization() {
        let report = SiteReport::calculate(CalculatorConfig::default()).unwrap();
        let json = serde_json::to_string_pretty(&report).unwrap();
        let roundtrip: SiteReport = serde_json::from_str(&json).unwrap();
        assert_eq!(report, roundtrip);
    }
}
