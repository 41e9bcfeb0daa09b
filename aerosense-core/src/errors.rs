//! Error Types for Reading Ingestion
//!
//! The aggregation core itself never fails: non-numeric values are silently
//! excluded from arithmetic and pollutants without readings simply come back
//! absent from the summary. Errors exist only at the ingestion boundary,
//! where a reading is checked against the pollutant table before it is
//! stored.
//!
//! Errors follow the same constraints as the rest of the crate:
//!
//! 1. **Small and Copy**: no heap allocation, only inline payloads, so they
//!    can be returned from hot ingestion paths and stored in queues.
//! 2. **Actionable**: each variant carries the pollutant and bounds involved
//!    so the caller can reject the payload with a precise message.

use thiserror_no_std::Error;

use crate::pollutant::Pollutant;

/// Result type for ingestion operations
pub type ReadingResult<T> = Result<T, ReadingError>;

/// Errors raised while validating or storing a reading
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ReadingError {
    /// Concentration outside the pollutant's valid range
    #[error("{pollutant} value {value} outside range [{min}, {max}]")]
    OutOfRange {
        /// Pollutant the value was reported for
        pollutant: Pollutant,
        /// The reported concentration
        value: f64,
        /// Minimum plausible concentration
        min: f64,
        /// Maximum plausible concentration
        max: f64,
    },

    /// Concentration is NaN or infinite
    #[error("{pollutant} value is not a valid number")]
    InvalidValue {
        /// Pollutant the value was reported for
        pollutant: Pollutant,
    },

    /// Sensor identifier does not fit the inline buffer
    #[error("sensor id length {len} exceeds maximum {max}")]
    SensorIdTooLong {
        /// Length of the rejected identifier in bytes
        len: usize,
        /// Maximum supported length
        max: usize,
    },
}

#[cfg(feature = "defmt")]
impl defmt::Format for ReadingError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::OutOfRange { pollutant, value, min, max } => {
                defmt::write!(fmt, "{} value {} outside [{}, {}]", pollutant.name(), value, min, max)
            }
            Self::InvalidValue { pollutant } => {
                defmt::write!(fmt, "{} value invalid", pollutant.name())
            }
            Self::SensorIdTooLong { len, max } => {
                defmt::write!(fmt, "sensor id length {} exceeds {}", len, max)
            }
        }
    }
}
