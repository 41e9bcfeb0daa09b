//! Pollutant Concentration Limits
//!
//! Valid ranges for the four tracked pollutants. Upper bounds follow the
//! highest AQI breakpoint published by the US EPA for each pollutant; a
//! reading above the bound is a sensor fault, not a plausible measurement.

// ===== OZONE (O3) =====

/// Minimum valid ozone concentration (ppm).
///
/// Concentrations are physical quantities; negative values indicate a
/// miscalibrated or failing sensor.
pub const O3_MIN_PPM: f64 = 0.0;

/// Maximum valid ozone concentration (ppm).
///
/// Upper bound of the EPA "Hazardous" AQI breakpoint for 1-hour ozone.
///
/// Source: US EPA AQI technical assistance document
pub const O3_MAX_PPM: f64 = 0.604;

// ===== CARBON MONOXIDE (CO) =====

/// Minimum valid carbon monoxide concentration (ppm).
pub const CO_MIN_PPM: f64 = 0.0;

/// Maximum valid carbon monoxide concentration (ppm).
///
/// Upper bound of the EPA "Hazardous" AQI breakpoint for 8-hour CO.
///
/// Source: US EPA AQI technical assistance document
pub const CO_MAX_PPM: f64 = 50.4;

// ===== SULFUR DIOXIDE (SO2) =====

/// Minimum valid sulfur dioxide concentration (ppb).
pub const SO2_MIN_PPB: f64 = 0.0;

/// Maximum valid sulfur dioxide concentration (ppb).
///
/// Upper bound of the EPA "Hazardous" AQI breakpoint for 24-hour SO2.
///
/// Source: US EPA AQI technical assistance document
pub const SO2_MAX_PPB: f64 = 1004.0;

// ===== NITROGEN DIOXIDE (NO2) =====

/// Minimum valid nitrogen dioxide concentration (ppb).
pub const NO2_MIN_PPB: f64 = 0.0;

/// Maximum valid nitrogen dioxide concentration (ppb).
///
/// Upper bound of the EPA "Hazardous" AQI breakpoint for 1-hour NO2.
///
/// Source: US EPA AQI technical assistance document
pub const NO2_MAX_PPB: f64 = 2049.0;
