//! # Instrument Calculations
//!
//! One module per instrument. Each follows the pattern:
//!
//! - `*Dimensions` - Fixed, named dimension set (JSON-serializable)
//! - `calculate(config) -> *Dimensions` - Pure proportion formulas
//!
//! [`calculate_all`] validates the config once, then evaluates the five
//! instruments in a fixed order. The first record is the default selection
//! for display.
//!
//! ## Available Instruments
//!
//! - [`samrat`] - Samrat Yantra, equinoctial sundial (latitude-dependent)
//! - [`rama`] - Rama Yantra, altitude-azimuth cylinder
//! - [`chakra`] - Chakra Yantra, graduated ring
//! - [`jai_prakash`] - Jai Prakash Yantra, hemispherical dial
//! - [`digamsa`] - Digamsa Yantra, azimuth circle
//!
//! ## JSON Shape
//!
//! ```json
//! {
//!   "name": "Rama Yantra",
//!   "category": "altitude_azimuth",
//!   "dimensions": {
//!     "cylinderRadius": 10.0,
//!     "cylinderHeight": 3.0,
//!     "pillarHeight": 4.5,
//!     "sectorAngle": 90.0,
//!     "numberOfSectors": 4
//!   },
//!   "description": "Used to measure altitude and azimuth of celestial objects"
//! }
//! ```

pub mod chakra;
pub mod digamsa;
pub mod jai_prakash;
pub mod rama;
pub mod samrat;

use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};

use crate::config::CalculatorConfig;
use crate::display::DimensionField;
use crate::errors::{CalcError, CalcResult};

// Re-export commonly used types
pub use chakra::ChakraDimensions;
pub use digamsa::DigamsaDimensions;
pub use jai_prakash::JaiPrakashDimensions;
pub use rama::RamaDimensions;
pub use samrat::SamratDimensions;

/// Geometric family of an instrument.
///
/// Renderers dispatch on this tag, so the serialized names are stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InstrumentCategory {
    Sundial,
    AltitudeAzimuth,
    AngularMeasurement,
    CelestialCoordinates,
    Azimuth,
}

impl InstrumentCategory {
    /// Stable identifier, identical to the serialized form
    pub fn code(&self) -> &'static str {
        match self {
            InstrumentCategory::Sundial => "sundial",
            InstrumentCategory::AltitudeAzimuth => "altitude_azimuth",
            InstrumentCategory::AngularMeasurement => "angular_measurement",
            InstrumentCategory::CelestialCoordinates => "celestial_coordinates",
            InstrumentCategory::Azimuth => "azimuth",
        }
    }
}

impl std::fmt::Display for InstrumentCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// The five instruments, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InstrumentKind {
    Samrat,
    Rama,
    Chakra,
    JaiPrakash,
    Digamsa,
}

impl InstrumentKind {
    /// All instruments in the order [`calculate_all`] returns them
    pub const ALL: [InstrumentKind; 5] = [
        InstrumentKind::Samrat,
        InstrumentKind::Rama,
        InstrumentKind::Chakra,
        InstrumentKind::JaiPrakash,
        InstrumentKind::Digamsa,
    ];

    /// Fixed instrument name
    pub fn name(&self) -> &'static str {
        match self {
            InstrumentKind::Samrat => "Samrat Yantra",
            InstrumentKind::Rama => "Rama Yantra",
            InstrumentKind::Chakra => "Chakra Yantra",
            InstrumentKind::JaiPrakash => "Jai Prakash Yantra",
            InstrumentKind::Digamsa => "Digamsa Yantra",
        }
    }

    pub fn category(&self) -> InstrumentCategory {
        match self {
            InstrumentKind::Samrat => InstrumentCategory::Sundial,
            InstrumentKind::Rama => InstrumentCategory::AltitudeAzimuth,
            InstrumentKind::Chakra => InstrumentCategory::AngularMeasurement,
            InstrumentKind::JaiPrakash => InstrumentCategory::CelestialCoordinates,
            InstrumentKind::Digamsa => InstrumentCategory::Azimuth,
        }
    }

    /// Static human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            InstrumentKind::Samrat => "Giant equinoctial sundial with gnomon aligned to Earth's axis",
            InstrumentKind::Rama => "Used to measure altitude and azimuth of celestial objects",
            InstrumentKind::Chakra => "Metal ring instrument for measuring angular positions",
            InstrumentKind::JaiPrakash => "Hemispherical sundial showing celestial coordinates",
            InstrumentKind::Digamsa => "Used to measure azimuth angles of celestial bodies",
        }
    }

    /// Parse from common string representations ("Samrat Yantra", "samrat",
    /// "jai-prakash", ...)
    pub fn from_str_flexible(s: &str) -> Option<Self> {
        let key: String = s
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect();
        let key = key.strip_suffix("yantra").unwrap_or(&key);
        match key {
            "samrat" => Some(InstrumentKind::Samrat),
            "rama" | "ram" => Some(InstrumentKind::Rama),
            "chakra" => Some(InstrumentKind::Chakra),
            "jaiprakash" => Some(InstrumentKind::JaiPrakash),
            "digamsa" | "digamsha" => Some(InstrumentKind::Digamsa),
            _ => None,
        }
    }
}

impl std::fmt::Display for InstrumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Per-category dimension sets.
///
/// Serialized adjacently tagged, which together with `#[serde(flatten)]` on
/// [`InstrumentSpec`] yields sibling `category` and `dimensions` keys.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "category", content = "dimensions", rename_all = "snake_case")]
pub enum Dimensions {
    Sundial(SamratDimensions),
    AltitudeAzimuth(RamaDimensions),
    AngularMeasurement(ChakraDimensions),
    CelestialCoordinates(JaiPrakashDimensions),
    Azimuth(DigamsaDimensions),
}

impl Dimensions {
    /// Category implied by the dimension set
    pub fn category(&self) -> InstrumentCategory {
        match self {
            Dimensions::Sundial(_) => InstrumentCategory::Sundial,
            Dimensions::AltitudeAzimuth(_) => InstrumentCategory::AltitudeAzimuth,
            Dimensions::AngularMeasurement(_) => InstrumentCategory::AngularMeasurement,
            Dimensions::CelestialCoordinates(_) => InstrumentCategory::CelestialCoordinates,
            Dimensions::Azimuth(_) => InstrumentCategory::Azimuth,
        }
    }

    /// Every field of the set, in declaration order
    pub fn fields(&self) -> Vec<DimensionField> {
        match self {
            Dimensions::Sundial(d) => d.fields(),
            Dimensions::AltitudeAzimuth(d) => d.fields(),
            Dimensions::AngularMeasurement(d) => d.fields(),
            Dimensions::CelestialCoordinates(d) => d.fields(),
            Dimensions::Azimuth(d) => d.fields(),
        }
    }

    /// Look up one field by its stable identifier (e.g. "gnomonBase")
    pub fn get(&self, name: &str) -> Option<f64> {
        self.fields()
            .into_iter()
            .find(|field| field.name == name)
            .map(|field| field.value)
    }
}

/// Computed record for one instrument.
///
/// Deserialization rejects records whose name is not one of the five
/// instruments or whose category does not belong to that instrument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawInstrumentSpec")]
pub struct InstrumentSpec {
    /// Fixed instrument name (e.g. "Samrat Yantra")
    pub name: String,

    /// Category tag and its dimension set
    #[serde(flatten)]
    pub dimensions: Dimensions,

    /// Static description
    pub description: String,
}

/// Wire form of [`InstrumentSpec`] before the name/category check
#[derive(Deserialize)]
struct RawInstrumentSpec {
    name: String,
    #[serde(flatten)]
    dimensions: Dimensions,
    description: String,
}

impl TryFrom<RawInstrumentSpec> for InstrumentSpec {
    type Error = CalcError;

    fn try_from(raw: RawInstrumentSpec) -> CalcResult<Self> {
        let kind = InstrumentKind::from_str_flexible(&raw.name)
            .ok_or_else(|| CalcError::invalid_input("name", raw.name.as_str(), "Unknown instrument"))?;
        if kind.category() != raw.dimensions.category() {
            return Err(CalcError::invalid_input(
                "category",
                raw.dimensions.category().code(),
                format!("{} belongs to category '{}'", kind.name(), kind.category()),
            ));
        }
        Ok(InstrumentSpec {
            name: raw.name,
            dimensions: raw.dimensions,
            description: raw.description,
        })
    }
}

impl InstrumentSpec {
    fn new(kind: InstrumentKind, dimensions: Dimensions) -> Self {
        debug_assert_eq!(kind.category(), dimensions.category());
        InstrumentSpec {
            name: kind.name().to_string(),
            dimensions,
            description: kind.description().to_string(),
        }
    }

    pub fn category(&self) -> InstrumentCategory {
        self.dimensions.category()
    }

    /// Instrument kind, recovered from the name
    pub fn kind(&self) -> Option<InstrumentKind> {
        InstrumentKind::from_str_flexible(&self.name)
    }
}

/// Calculate all five instruments for one site.
///
/// Validation happens up front; an invalid config fails the whole call and
/// no partial set is returned.
///
/// # Example
///
/// ```rust
/// use yantra_core::config::CalculatorConfig;
/// use yantra_core::instruments::{calculate_all, InstrumentCategory};
///
/// let config = CalculatorConfig::new(26.9124, 75.7873, 10.0).unwrap();
/// let instruments = calculate_all(&config).unwrap();
///
/// assert_eq!(instruments.len(), 5);
/// assert_eq!(instruments[0].category(), InstrumentCategory::Sundial);
/// ```
pub fn calculate_all(config: &CalculatorConfig) -> CalcResult<Vec<InstrumentSpec>> {
    if let Err(err) = config.validate() {
        warn!("Rejected calculation request: {}", err);
        return Err(err);
    }

    debug!(
        "Calculating instruments for lat={}° lon={}° base={} m",
        config.latitude_deg, config.longitude_deg, config.base_size_m
    );

    let instruments = vec![
        InstrumentSpec::new(InstrumentKind::Samrat, Dimensions::Sundial(samrat::calculate(config)?)),
        InstrumentSpec::new(InstrumentKind::Rama, Dimensions::AltitudeAzimuth(rama::calculate(config))),
        InstrumentSpec::new(InstrumentKind::Chakra, Dimensions::AngularMeasurement(chakra::calculate(config))),
        InstrumentSpec::new(
            InstrumentKind::JaiPrakash,
            Dimensions::CelestialCoordinates(jai_prakash::calculate(config)),
        ),
        InstrumentSpec::new(InstrumentKind::Digamsa, Dimensions::Azimuth(digamsa::calculate(config))),
    ];

    for spec in &instruments {
        trace!("{} ({}): {:?}", spec.name, spec.category(), spec.dimensions);
    }

    // Latitude overflow is caught by the Samrat formula; anything left is size
    if let Some(field) = instruments
        .iter()
        .flat_map(|spec| spec.dimensions.fields())
        .find(|field| !field.value.is_finite() || field.value < 0.0)
    {
        return Err(CalcError::invalid_base_size(
            config.base_size_m.to_string(),
            format!("Base size is too large: {} overflows", field.name),
        ));
    }

    Ok(instruments)
}
