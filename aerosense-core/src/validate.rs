//! Ingestion-Side Reading Validation
//!
//! Range checks applied to a reading before it enters a store. This is the
//! only layer that rejects data: once a reading is stored, the aggregation
//! engine treats it as trusted and sparse (absent pollutants are skipped,
//! never errors).
//!
//! Validation is pure and allocation-free; limits come from the
//! [`PollutantTable`] the caller supplies, never from constants baked into
//! the check itself.

use crate::errors::{ReadingError, ReadingResult};
use crate::pollutant::{Pollutant, PollutantTable};
use crate::reading::Reading;

/// Check every reported concentration against the pollutant table
///
/// A reading with no reported pollutants at all is valid; sparse data is
/// normal. The first violation found is returned.
pub fn validate_reading(reading: &Reading, table: &PollutantTable) -> ReadingResult<()> {
    for pollutant in Pollutant::ALL {
        if let Some(value) = reading.quality().get(pollutant) {
            if !value.is_finite() {
                return Err(ReadingError::InvalidValue { pollutant });
            }

            let def = table.def(pollutant);
            check_range(pollutant, value, def.min, def.max)?;
        }
    }

    Ok(())
}

/// Check that a concentration lies within `[min, max]`
pub fn check_range(pollutant: Pollutant, value: f64, min: f64, max: f64) -> ReadingResult<()> {
    if value < min || value > max {
        Err(ReadingError::OutOfRange { pollutant, value, min, max })
    } else {
        Ok(())
    }
}
