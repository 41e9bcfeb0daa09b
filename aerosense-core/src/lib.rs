//! Core aggregation engine for Aerosense
//!
//! Ingests air-quality sensor readings and serves per-pollutant statistics
//! (minimum, maximum, average), optionally filtered by sensor. The heart of
//! the crate is a decimal-safe arithmetic kernel: running totals and
//! averages are computed without the binary floating-point artifacts users
//! must never see (`0.1 + 0.2` is `0.3` here, not `0.30000000000000004`).
//!
//! Key constraints:
//! - `no_std` capable core (std only for the in-memory store)
//! - No heap allocation in the fold path
//! - Malformed numeric input is dropped, never an error
//!
//! ```
//! use aerosense_core::{summarize, Pollutant, PollutantTable, Reading, SensorId};
//!
//! let table = PollutantTable::default();
//! let readings = [
//!     Reading::new(SensorId::new("station-1")?, 1000).with(Pollutant::O3, 0.2),
//!     Reading::new(SensorId::new("station-1")?, 2000).with(Pollutant::O3, 0.6),
//! ];
//!
//! let summary = summarize(&readings, &table, None);
//! assert_eq!(summary.get(Pollutant::O3).average, Some(0.4));
//! # Ok::<(), aerosense_core::ReadingError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod arith;
pub mod constants;
pub mod decimal;
pub mod errors;
pub mod pollutant;
pub mod reading;
#[cfg(feature = "std")]
pub mod store;
pub mod summary;
pub mod time;
pub mod validate;
pub mod value;

// Public API
pub use errors::{ReadingError, ReadingResult};
pub use pollutant::{Pollutant, PollutantDef, PollutantTable, Unit};
pub use reading::{Quality, Reading, SensorId};
#[cfg(feature = "std")]
pub use store::ReadingStore;
pub use summary::{summarize, Extreme, PollutantSummary, Summary};
pub use time::{TimeSource, Timestamp};
pub use validate::validate_reading;
pub use value::Value;

/// Crate version string
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }
}
