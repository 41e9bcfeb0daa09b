//! Constants for Aerosense Core
//!
//! Centralized, documented constants used throughout the crate. All numeric
//! values live here with their source and rationale so nothing in the core
//! logic carries magic numbers.
//!
//! ## Organization
//!
//! - **Pollutants**: valid concentration ranges per pollutant
//! - **Numeric**: limits and buffer sizes for the decimal-safe kernel

/// Pollutant concentration limits based on EPA AQI breakpoint tables.
pub mod pollutants;

/// Limits and scratch-buffer sizes for decimal-safe arithmetic.
pub mod numeric;

// Re-export commonly used constants for convenience
pub use pollutants::{
    O3_MIN_PPM, O3_MAX_PPM,
    CO_MIN_PPM, CO_MAX_PPM,
    SO2_MIN_PPB, SO2_MAX_PPB,
    NO2_MIN_PPB, NO2_MAX_PPB,
};

pub use numeric::{DECIMAL_ALIGNMENT_LIMIT, DECIMAL_RENDER_CAPACITY, NUMERIC_TEXT_CAPACITY};
