//! Pollutant Categories and Their Definitions
//!
//! The four tracked pollutants form a closed enumeration: every accumulator,
//! quality map, and summary in this crate is a fixed-size structure keyed by
//! [`Pollutant`], never a dynamically extensible map. Unit labels and valid
//! ranges are carried by a [`PollutantTable`] that callers pass into the
//! aggregation engine, so the core logic never reads configuration directly.
//!
//! The default table uses the EPA AQI breakpoint ranges from
//! [`crate::constants::pollutants`]; deployments with calibrated sensors can
//! supply tighter tables.

use core::fmt;

use crate::constants::pollutants::{
    CO_MAX_PPM, CO_MIN_PPM, NO2_MAX_PPB, NO2_MIN_PPB, O3_MAX_PPM, O3_MIN_PPM, SO2_MAX_PPB,
    SO2_MIN_PPB,
};

/// Pollutant category enumeration
///
/// Maps to a fixed unit label and valid concentration range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Pollutant {
    /// Ozone, measured in ppm
    O3 = 0,
    /// Carbon monoxide, measured in ppm
    CO = 1,
    /// Sulfur dioxide, measured in ppb
    SO2 = 2,
    /// Nitrogen dioxide, measured in ppb
    NO2 = 3,
}

impl Pollutant {
    /// Number of tracked pollutants
    pub const COUNT: usize = 4;

    /// All pollutants in canonical order
    pub const ALL: [Pollutant; Self::COUNT] =
        [Pollutant::O3, Pollutant::CO, Pollutant::SO2, Pollutant::NO2];

    /// Get the pollutant code as used in reading payloads
    pub const fn name(&self) -> &'static str {
        match self {
            Pollutant::O3 => "O3",
            Pollutant::CO => "CO",
            Pollutant::SO2 => "SO2",
            Pollutant::NO2 => "NO2",
        }
    }

    /// Position in fixed-size per-pollutant arrays
    pub const fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Pollutant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unit of measurement for a pollutant concentration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Unit {
    /// Parts per million
    Ppm,
    /// Parts per billion
    Ppb,
}

impl Unit {
    /// Get the unit label as it appears in summaries
    pub const fn as_str(&self) -> &'static str {
        match self {
            Unit::Ppm => "ppm",
            Unit::Ppb => "ppb",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Definition of a single pollutant: unit label plus valid range
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PollutantDef {
    /// Unit the concentration is expressed in
    pub unit: Unit,
    /// Minimum plausible concentration
    pub min: f64,
    /// Maximum plausible concentration
    pub max: f64,
}

/// Fixed table of pollutant definitions, indexed by [`Pollutant`]
///
/// Supplied to the aggregation engine and the ingestion validator as
/// configuration. [`PollutantTable::default`] carries the EPA reference
/// ranges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PollutantTable {
    defs: [PollutantDef; Pollutant::COUNT],
}

impl PollutantTable {
    /// Create a table from explicit definitions, in [`Pollutant::ALL`] order
    pub const fn new(defs: [PollutantDef; Pollutant::COUNT]) -> Self {
        Self { defs }
    }

    /// Look up the definition for a pollutant
    pub const fn def(&self, pollutant: Pollutant) -> &PollutantDef {
        &self.defs[pollutant.index()]
    }
}

impl Default for PollutantTable {
    fn default() -> Self {
        Self::new([
            PollutantDef { unit: Unit::Ppm, min: O3_MIN_PPM, max: O3_MAX_PPM },
            PollutantDef { unit: Unit::Ppm, min: CO_MIN_PPM, max: CO_MAX_PPM },
            PollutantDef { unit: Unit::Ppb, min: SO2_MIN_PPB, max: SO2_MAX_PPB },
            PollutantDef { unit: Unit::Ppb, min: NO2_MIN_PPB, max: NO2_MAX_PPB },
        ])
    }
}
